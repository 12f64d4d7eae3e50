//! Boolean occupancy grids over integer cell indices.

pub use self::bitset::BitSetDiscreteVoxelShape;
pub use self::sub_shape::SubShape;

use crate::math::{Axis, AxisCycle, AxisDirection, AxisMask, Direction, Point};

mod bitset;
mod sub_shape;

/// A 3D grid of cells, each either full or empty.
///
/// Every representation caches, per axis, the semi-open range `[first_full, last_full)` of
/// indices containing at least one full cell, so emptiness and bounds queries are O(1).
/// Shapes are immutable once built.
#[derive(Clone, Debug)]
pub enum DiscreteVoxelShape {
    /// A dense grid with one bit per cell.
    BitSet(BitSetDiscreteVoxelShape),
    /// A zero-copy window into another grid.
    Sub(SubShape),
}

impl DiscreteVoxelShape {
    /// The number of cells along `axis`.
    #[inline]
    pub fn size(&self, axis: Axis) -> i32 {
        match self {
            DiscreteVoxelShape::BitSet(s) => s.size(axis),
            DiscreteVoxelShape::Sub(s) => s.size(axis),
        }
    }

    /// The number of cells along `x`.
    #[inline]
    pub fn x_size(&self) -> i32 {
        self.size(Axis::X)
    }

    /// The number of cells along `y`.
    #[inline]
    pub fn y_size(&self) -> i32 {
        self.size(Axis::Y)
    }

    /// The number of cells along `z`.
    #[inline]
    pub fn z_size(&self) -> i32 {
        self.size(Axis::Z)
    }

    /// Is the cell `(x, y, z)` full?
    ///
    /// The cell must lie inside the grid: out-of-range indices may panic. Use
    /// [`Self::is_full_wide`] when that isn't guaranteed.
    #[inline]
    pub fn is_full(&self, x: i32, y: i32, z: i32) -> bool {
        match self {
            DiscreteVoxelShape::BitSet(s) => s.is_full(x, y, z),
            DiscreteVoxelShape::Sub(s) => s.is_full(x, y, z),
        }
    }

    /// Is the cell `(x, y, z)` full? Cells outside of the grid are empty.
    #[inline]
    pub fn is_full_wide(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && x < self.x_size()
            && y < self.y_size()
            && z < self.z_size()
            && self.is_full(x, y, z)
    }

    /// [`Self::is_full`] with coordinates `(x, y, z)` expressed in the frame cycled by `cycle`.
    #[inline]
    pub fn is_full_cycled(&self, cycle: AxisCycle, x: i32, y: i32, z: i32) -> bool {
        self.is_full(
            cycle.cycle(x, y, z, Axis::X),
            cycle.cycle(x, y, z, Axis::Y),
            cycle.cycle(x, y, z, Axis::Z),
        )
    }

    /// [`Self::is_full_wide`] with coordinates `(x, y, z)` expressed in the frame cycled by `cycle`.
    #[inline]
    pub fn is_full_wide_cycled(&self, cycle: AxisCycle, x: i32, y: i32, z: i32) -> bool {
        self.is_full_wide(
            cycle.cycle(x, y, z, Axis::X),
            cycle.cycle(x, y, z, Axis::Y),
            cycle.cycle(x, y, z, Axis::Z),
        )
    }

    /// The first index along `axis` of a slab containing a full cell.
    ///
    /// Greater or equal to [`Self::last_full`] iff the shape is empty.
    #[inline]
    pub fn first_full(&self, axis: Axis) -> i32 {
        match self {
            DiscreteVoxelShape::BitSet(s) => s.first_full(axis),
            DiscreteVoxelShape::Sub(s) => s.first_full(axis),
        }
    }

    /// One past the last index along `axis` of a slab containing a full cell.
    #[inline]
    pub fn last_full(&self, axis: Axis) -> i32 {
        match self {
            DiscreteVoxelShape::BitSet(s) => s.last_full(axis),
            DiscreteVoxelShape::Sub(s) => s.last_full(axis),
        }
    }

    /// Does this shape contain no full cell?
    pub fn is_empty(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|axis| self.first_full(*axis) >= self.last_full(*axis))
    }

    /// The first full index of the column along `axis` passing through the cell at
    /// coordinates `(y, z)` on the two other axes (taken in cyclic order after `axis`).
    ///
    /// Returns `size(axis)` if the column is empty or lies outside of the grid.
    pub fn first_full_at(&self, axis: Axis, y: i32, z: i32) -> i32 {
        let size = self.size(axis);

        if !self.column_in_range(axis, y, z) {
            return size;
        }

        let cycle = AxisCycle::between(Axis::X, axis);
        (0..size)
            .find(|i| self.is_full_cycled(cycle, *i, y, z))
            .unwrap_or(size)
    }

    /// One past the last full index of the column along `axis` passing through `(y, z)`.
    ///
    /// Returns `0` if the column is empty or lies outside of the grid.
    pub fn last_full_at(&self, axis: Axis, y: i32, z: i32) -> i32 {
        if !self.column_in_range(axis, y, z) {
            return 0;
        }

        let cycle = AxisCycle::between(Axis::X, axis);
        (0..self.size(axis))
            .rev()
            .find(|i| self.is_full_cycled(cycle, *i, y, z))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn column_in_range(&self, axis: Axis, y: i32, z: i32) -> bool {
        let y_axis = AxisCycle::Forward.cycle_axis(axis);
        let z_axis = AxisCycle::Backward.cycle_axis(axis);
        y >= 0 && z >= 0 && y < self.size(y_axis) && z < self.size(z_axis)
    }

    /// The faces of the full cell `(x, y, z)` whose neighbor is empty or outside of the grid.
    ///
    /// Returns an empty mask for empty cells.
    pub fn free_faces(&self, x: i32, y: i32, z: i32) -> AxisMask {
        let mut result = AxisMask::empty();

        if !self.is_full_wide(x, y, z) {
            return result;
        }

        for dir in Direction::ALL {
            let mut neighbor = [x, y, z];
            neighbor[dir.axis().index()] += dir.axis_direction().step();

            if !self.is_full_wide(neighbor[0], neighbor[1], neighbor[2]) {
                result |= dir.axis_mask();
            }
        }

        result
    }

    /// Is `(x, y, z)` a full cell whose six neighbors are full too?
    ///
    /// Cells on the border of the grid are never interior.
    pub fn is_interior(&self, x: i32, y: i32, z: i32) -> bool {
        self.is_full_wide(x, y, z) && self.free_faces(x, y, z).is_empty()
    }

    /// Decomposes the full cells into boxes of cells given as semi-open ranges `[mins, maxs)`.
    ///
    /// See [`BitSetDiscreteVoxelShape::for_all_boxes`] for the traversal order.
    pub fn for_all_boxes(&self, consumer: impl FnMut(Point<i32>, Point<i32>), combine: bool) {
        BitSetDiscreteVoxelShape::for_all_boxes(self, consumer, combine)
    }

    /// Extracts the edges of the wireframe of this shape, as pairs of grid vertices.
    ///
    /// An edge along an axis is visible where one or three of the four cells around it are
    /// full, or where exactly two diagonally-opposed cells are.
    /// With `combine`, collinear consecutive edges are merged.
    pub fn for_all_edges(
        &self,
        mut consumer: impl FnMut(Point<i32>, Point<i32>),
        combine: bool,
    ) {
        for cycle in AxisCycle::ALL {
            self.for_all_axis_edges(&mut consumer, cycle, combine);
        }
    }

    fn for_all_axis_edges(
        &self,
        consumer: &mut impl FnMut(Point<i32>, Point<i32>),
        cycle: AxisCycle,
        combine: bool,
    ) {
        let inv = cycle.inverse();
        let x_size = self.size(inv.cycle_axis(Axis::X));
        let y_size = self.size(inv.cycle_axis(Axis::Y));
        let z_size = self.size(inv.cycle_axis(Axis::Z));
        let vertex = |a: i32, b: i32, c: i32| {
            Point::new(
                inv.cycle(a, b, c, Axis::X),
                inv.cycle(a, b, c, Axis::Y),
                inv.cycle(a, b, c, Axis::Z),
            )
        };

        for a in 0..=x_size {
            for b in 0..=y_size {
                let mut run_start = None;

                for c in 0..=z_size {
                    let mut full_count = 0;
                    let mut parity = 0;

                    for da in 0..=1 {
                        for db in 0..=1 {
                            if self.is_full_wide_cycled(inv, a + da - 1, b + db - 1, c) {
                                full_count += 1;
                                parity ^= da ^ db;
                            }
                        }
                    }

                    let is_edge =
                        full_count == 1 || full_count == 3 || (full_count == 2 && parity == 0);

                    if is_edge {
                        if !combine {
                            consumer(vertex(a, b, c), vertex(a, b, c + 1));
                        } else if run_start.is_none() {
                            run_start = Some(c);
                        }
                    } else if let Some(c_start) = run_start.take() {
                        consumer(vertex(a, b, c_start), vertex(a, b, c));
                    }
                }
            }
        }
    }

    /// Emits every exposed face of a full cell, with its outward direction and cell index.
    ///
    /// A face is exposed where a column switches between full and empty, the grid border
    /// counting as empty.
    pub fn for_all_faces(&self, mut consumer: impl FnMut(Direction, Point<i32>)) {
        for cycle in AxisCycle::ALL {
            self.for_all_axis_faces(&mut consumer, cycle);
        }
    }

    fn for_all_axis_faces(
        &self,
        consumer: &mut impl FnMut(Direction, Point<i32>),
        cycle: AxisCycle,
    ) {
        let inv = cycle.inverse();
        let axis = inv.cycle_axis(Axis::Z);
        let x_size = self.size(inv.cycle_axis(Axis::X));
        let y_size = self.size(inv.cycle_axis(Axis::Y));
        let z_size = self.size(axis);
        let negative = Direction::from_axis_and_direction(axis, AxisDirection::Negative);
        let positive = Direction::from_axis_and_direction(axis, AxisDirection::Positive);
        let cell = |a: i32, b: i32, c: i32| {
            Point::new(
                inv.cycle(a, b, c, Axis::X),
                inv.cycle(a, b, c, Axis::Y),
                inv.cycle(a, b, c, Axis::Z),
            )
        };

        for a in 0..x_size {
            for b in 0..y_size {
                let mut prev_full = false;

                for c in 0..=z_size {
                    let is_full = c != z_size && self.is_full_cycled(inv, a, b, c);

                    if !prev_full && is_full {
                        consumer(negative, cell(a, b, c));
                    }
                    if prev_full && !is_full {
                        consumer(positive, cell(a, b, c - 1));
                    }

                    prev_full = is_full;
                }
            }
        }
    }
}
