use super::DiscreteVoxelShape;
use crate::math::{Axis, Point, Real};
use crate::shape::{BooleanOp, IndexMerger, ShapeError};
use bitvec::vec::BitVec;

/// A dense occupancy grid storing one bit per cell.
///
/// Cell `(x, y, z)` is stored at bit `(x * y_size + y) * z_size + z`. The grid caches the
/// semi-open range `[mins, maxs)` of full cells along each axis; it is updated while the
/// grid is being filled and never after the grid is handed to a shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSetDiscreteVoxelShape {
    size: [i32; 3],
    storage: BitVec,
    mins: [i32; 3],
    maxs: [i32; 3],
}

impl BitSetDiscreteVoxelShape {
    /// An empty grid with the given dimensions.
    pub fn new(x_size: i32, y_size: i32, z_size: i32) -> Result<Self, ShapeError> {
        if x_size < 0 || y_size < 0 || z_size < 0 {
            return Err(ShapeError::NegativeSize {
                x: x_size,
                y: y_size,
                z: z_size,
            });
        }

        Ok(Self::empty_grid([x_size, y_size, z_size]))
    }

    // NOTE: `size` must be non-negative.
    pub(crate) fn empty_grid(size: [i32; 3]) -> Self {
        let len = size[0] as usize * size[1] as usize * size[2] as usize;
        Self {
            size,
            storage: BitVec::repeat(false, len),
            mins: size,
            maxs: [0; 3],
        }
    }

    /// A grid of the given `size` where exactly the cells in `[mins, maxs)` are full.
    ///
    /// This is the fast path used to build box shapes without going through [`Self::fill`].
    pub fn with_filled_bounds(
        size: [i32; 3],
        mins: [i32; 3],
        maxs: [i32; 3],
    ) -> Result<Self, ShapeError> {
        if size.iter().any(|s| *s < 0) {
            return Err(ShapeError::NegativeSize {
                x: size[0],
                y: size[1],
                z: size[2],
            });
        }

        for i in 0..3 {
            if mins[i] < 0 || maxs[i] > size[i] || mins[i] > maxs[i] {
                return Err(ShapeError::InvalidBounds {
                    axis: Axis::ALL[i],
                    min: mins[i] as Real,
                    max: maxs[i] as Real,
                });
            }
        }

        Ok(Self::filled(size, mins, maxs))
    }

    // NOTE: `0 <= mins <= maxs <= size` must hold.
    pub(crate) fn filled(size: [i32; 3], mins: [i32; 3], maxs: [i32; 3]) -> Self {
        let mut result = Self::empty_grid(size);

        if mins[2] < maxs[2] {
            for x in mins[0]..maxs[0] {
                for y in mins[1]..maxs[1] {
                    let start = result.index(x, y, mins[2]);
                    let end = result.index(x, y, maxs[2]);
                    result.storage[start..end].fill(true);
                }
            }
        }

        result.mins = mins;
        result.maxs = maxs;
        result
    }

    /// A bitset copy of any discrete shape.
    pub fn from_shape(shape: &DiscreteVoxelShape) -> Self {
        if let DiscreteVoxelShape::BitSet(bitset) = shape {
            return bitset.clone();
        }

        let size = [shape.x_size(), shape.y_size(), shape.z_size()];
        let mut result = Self::empty_grid(size);

        for x in 0..size[0] {
            for y in 0..size[1] {
                for z in 0..size[2] {
                    if shape.is_full(x, y, z) {
                        let id = result.index(x, y, z);
                        result.storage.set(id, true);
                    }
                }
            }
        }

        for axis in Axis::ALL {
            result.mins[axis.index()] = shape.first_full(axis);
            result.maxs[axis.index()] = shape.last_full(axis);
        }

        result
    }

    /// The number of cells along `axis`.
    #[inline]
    pub fn size(&self, axis: Axis) -> i32 {
        self.size[axis.index()]
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        ((x * self.size[1] + y) * self.size[2] + z) as usize
    }

    /// Is the cell `(x, y, z)` full?
    ///
    /// Panics if the cell is outside of the grid.
    #[inline]
    pub fn is_full(&self, x: i32, y: i32, z: i32) -> bool {
        self.storage[self.index(x, y, z)]
    }

    /// Marks the cell `(x, y, z)` as full, and grows the cached bounds to include it.
    ///
    /// Panics if the cell is outside of the grid.
    pub fn fill(&mut self, x: i32, y: i32, z: i32) {
        let id = self.index(x, y, z);
        self.storage.set(id, true);

        let cell = [x, y, z];
        for i in 0..3 {
            self.mins[i] = self.mins[i].min(cell[i]);
            self.maxs[i] = self.maxs[i].max(cell[i] + 1);
        }
    }

    /// The first index of the cached semi-open range of full cells along `axis`.
    #[inline]
    pub fn first_full(&self, axis: Axis) -> i32 {
        self.mins[axis.index()]
    }

    /// The last index (excluded) of the cached semi-open range of full cells along `axis`.
    #[inline]
    pub fn last_full(&self, axis: Axis) -> i32 {
        self.maxs[axis.index()]
    }

    /// Does this grid contain no full cell at all?
    #[inline]
    pub fn is_storage_empty(&self) -> bool {
        self.storage.not_any()
    }

    fn clear_z_strip(&mut self, z_min: i32, z_max: i32, x: i32, y: i32) {
        let start = self.index(x, y, z_min);
        let end = self.index(x, y, z_max);
        self.storage[start..end].fill(false);
    }

    fn is_z_strip_full(&self, z_min: i32, z_max: i32, x: i32, y: i32) -> bool {
        x < self.size[0]
            && y < self.size[1]
            && self.storage[self.index(x, y, z_min)..self.index(x, y, z_max)].all()
    }

    fn is_xz_rectangle_full(&self, x_min: i32, x_max: i32, z_min: i32, z_max: i32, y: i32) -> bool {
        (x_min..x_max).all(|x| self.is_z_strip_full(z_min, z_max, x, y))
    }

    /// Combines two discrete shapes cell by cell.
    ///
    /// The result has one cell per merged interval of each merger. A cell is full iff `op`
    /// maps the occupancy of the corresponding cells of `first` and `second` to `true`;
    /// cells mapped outside of an input count as empty. The cached bounds are accumulated
    /// while iterating so the whole join costs one pass over the merged cells.
    pub fn join(
        first: &DiscreteVoxelShape,
        second: &DiscreteVoxelShape,
        x_merger: &IndexMerger,
        y_merger: &IndexMerger,
        z_merger: &IndexMerger,
        op: BooleanOp,
    ) -> Self {
        let mut result = Self::empty_grid([
            x_merger.len() as i32 - 1,
            y_merger.len() as i32 - 1,
            z_merger.len() as i32 - 1,
        ]);
        let mut mins = [i32::MAX; 3];
        let mut maxs = [i32::MIN; 3];

        for x in x_merger.intervals() {
            let mut x_is_full = false;

            for y in y_merger.intervals() {
                let mut y_is_full = false;

                for z in z_merger.intervals() {
                    if op.apply(
                        first.is_full_wide(x.first, y.first, z.first),
                        second.is_full_wide(x.second, y.second, z.second),
                    ) {
                        let id = result.index(x.merged, y.merged, z.merged);
                        result.storage.set(id, true);
                        mins[2] = mins[2].min(z.merged);
                        maxs[2] = maxs[2].max(z.merged);
                        y_is_full = true;
                    }
                }

                if y_is_full {
                    mins[1] = mins[1].min(y.merged);
                    maxs[1] = maxs[1].max(y.merged);
                    x_is_full = true;
                }
            }

            if x_is_full {
                mins[0] = mins[0].min(x.merged);
                maxs[0] = maxs[0].max(x.merged);
            }
        }

        if mins[0] != i32::MAX {
            result.mins = mins;
            result.maxs = maxs.map(|m| m + 1);
        }

        result
    }

    /// Decomposes the full cells of `shape` into axis-aligned boxes of cells.
    ///
    /// Cells are visited with `y` in the outer loop, then `x`, then `z`. With `combine`,
    /// each run of full cells along `z` is greedily extended along `x`, then along `y`, as
    /// long as the whole rectangle stays full; consumed cells are cleared from a scratch copy
    /// so every full cell ends up in exactly one box. Without `combine`, one box is emitted
    /// per full cell. Boxes are given as the semi-open cell range `[mins, maxs)`.
    pub fn for_all_boxes(
        shape: &DiscreteVoxelShape,
        mut consumer: impl FnMut(Point<i32>, Point<i32>),
        combine: bool,
    ) {
        let mut scratch = Self::from_shape(shape);
        let [x_size, y_size, z_size] = scratch.size;

        for y in 0..y_size {
            for x in 0..x_size {
                let mut run_start = None;

                for z in 0..=z_size {
                    if z < z_size && scratch.is_full(x, y, z) {
                        if !combine {
                            consumer(Point::new(x, y, z), Point::new(x + 1, y + 1, z + 1));
                        } else if run_start.is_none() {
                            run_start = Some(z);
                        }
                    } else if let Some(z_start) = run_start.take() {
                        let mut x_end = x;
                        let mut y_end = y;
                        scratch.clear_z_strip(z_start, z, x, y);

                        while scratch.is_z_strip_full(z_start, z, x_end + 1, y) {
                            scratch.clear_z_strip(z_start, z, x_end + 1, y);
                            x_end += 1;
                        }

                        while scratch.is_xz_rectangle_full(x, x_end + 1, z_start, z, y_end + 1) {
                            for strip_x in x..=x_end {
                                scratch.clear_z_strip(z_start, z, strip_x, y_end + 1);
                            }
                            y_end += 1;
                        }

                        consumer(
                            Point::new(x, y, z_start),
                            Point::new(x_end + 1, y_end + 1, z),
                        );
                    }
                }
            }
        }
    }
}
