use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisCycle, AxisDirection, Direction, Point, Real, Vector, EPSILON};
use crate::shape::{BooleanOp, CoordinateList, DiscreteVoxelShape, ShapeError, SubShape};
use crate::shapes;
use crate::utils;
use core::fmt;
use std::sync::{Arc, OnceLock};

/// The representation of a [`VoxelShape`], telling how grid indices map to coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// The grid uniformly subdivides the unit cube: no coordinate list is stored.
    Cube,
    /// Each axis has an explicit, possibly translated, coordinate list.
    Array,
    /// A one-cell-thick cross-section of another shape.
    Slice,
}

#[derive(Clone, Debug)]
enum ShapeRepr {
    Cube,
    Array([CoordinateList; 3]),
    // The list along `axis` is always `[0, 1]`.
    Slice {
        axis: Axis,
        coords: [CoordinateList; 3],
    },
}

struct VoxelShapeData {
    discrete: Arc<DiscreteVoxelShape>,
    repr: ShapeRepr,
    faces: [OnceLock<VoxelShape>; 6],
}

/// A solid made of axis-aligned boxes, described by a discrete grid plus the real position
/// of the split planes along each axis.
///
/// A `VoxelShape` is an immutable, reference-counted handle: cloning it is cheap and the
/// clones share both the grid and the memoized face shapes. Use [`VoxelShape::ptr_eq`] to
/// compare handles by identity, as done for the [`shapes::block`] and [`shapes::empty`]
/// singletons.
///
/// Shapes are built with the functions of the [`shapes`](crate::shapes) module.
#[derive(Clone)]
pub struct VoxelShape(Arc<VoxelShapeData>);

static_assertions::assert_impl_all!(VoxelShape: Send, Sync);

impl VoxelShape {
    fn from_repr(discrete: Arc<DiscreteVoxelShape>, repr: ShapeRepr) -> Self {
        VoxelShape(Arc::new(VoxelShapeData {
            discrete,
            repr,
            faces: Default::default(),
        }))
    }

    /// A shape uniformly subdividing the unit cube with the cells of `discrete`.
    ///
    /// Fails if `discrete` has no cell along some axis.
    pub fn cube(discrete: DiscreteVoxelShape) -> Result<Self, ShapeError> {
        for axis in Axis::ALL {
            if discrete.size(axis) <= 0 {
                return Err(ShapeError::InvalidSubdivision);
            }
        }

        Ok(Self::new_cube(Arc::new(discrete)))
    }

    /// A shape mapping the cells of `discrete` with explicit coordinate lists.
    ///
    /// Each list must have exactly one more value than `discrete` has cells along its axis.
    pub fn array(
        discrete: DiscreteVoxelShape,
        xs: CoordinateList,
        ys: CoordinateList,
        zs: CoordinateList,
    ) -> Result<Self, ShapeError> {
        let coords = [xs, ys, zs];

        for axis in Axis::ALL {
            let expected = discrete.size(axis) as usize + 1;
            let found = coords[axis.index()].len();

            if expected != found {
                return Err(ShapeError::InconsistentCoordinates {
                    axis,
                    expected,
                    found,
                });
            }
        }

        Ok(Self::new_array(Arc::new(discrete), coords))
    }

    // NOTE: all sizes of `discrete` must be positive.
    pub(crate) fn new_cube(discrete: Arc<DiscreteVoxelShape>) -> Self {
        Self::from_repr(discrete, ShapeRepr::Cube)
    }

    // NOTE: list lengths must match the grid sizes plus one.
    pub(crate) fn new_array(discrete: Arc<DiscreteVoxelShape>, coords: [CoordinateList; 3]) -> Self {
        Self::from_repr(discrete, ShapeRepr::Array(coords))
    }

    /// Do `self` and `other` point to the same shape?
    #[inline]
    pub fn ptr_eq(&self, other: &VoxelShape) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The representation of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self.0.repr {
            ShapeRepr::Cube => ShapeKind::Cube,
            ShapeRepr::Array(_) => ShapeKind::Array,
            ShapeRepr::Slice { .. } => ShapeKind::Slice,
        }
    }

    /// The axis a slice shape was cut across, if this is a slice.
    pub fn slice_axis(&self) -> Option<Axis> {
        match self.0.repr {
            ShapeRepr::Slice { axis, .. } => Some(axis),
            _ => None,
        }
    }

    /// The occupancy grid of this shape.
    #[inline]
    pub fn discrete(&self) -> &DiscreteVoxelShape {
        &self.0.discrete
    }

    pub(crate) fn discrete_shared(&self) -> &Arc<DiscreteVoxelShape> {
        &self.0.discrete
    }

    /// The split planes of this shape along `axis`.
    pub fn coordinates(&self, axis: Axis) -> CoordinateList {
        match &self.0.repr {
            ShapeRepr::Cube => CoordinateList::Uniform(self.0.discrete.size(axis) as u32),
            ShapeRepr::Array(coords) | ShapeRepr::Slice { coords, .. } => {
                coords[axis.index()].clone()
            }
        }
    }

    /// The position of the `index`-th split plane along `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis, index: i32) -> Real {
        match &self.0.repr {
            ShapeRepr::Cube => index as Real / self.0.discrete.size(axis) as Real,
            ShapeRepr::Array(coords) | ShapeRepr::Slice { coords, .. } => {
                coords[axis.index()].value_at(index as usize)
            }
        }
    }

    /// The index of the cell containing `position` along `axis`.
    ///
    /// This is the greatest `i` such that `self.coord(axis, i) <= position`: `-1` before the
    /// first split plane, and the number of cells past the last one.
    pub fn find_index(&self, axis: Axis, position: Real) -> i32 {
        let size = self.0.discrete.size(axis);

        match self.0.repr {
            ShapeRepr::Cube => (position * size as Real)
                .clamp(-1.0, size as Real)
                .floor() as i32,
            _ => utils::binary_search(0, size + 1, |i| position < self.coord(axis, i)) - 1,
        }
    }

    /// Does this shape contain no solid at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.discrete.is_empty()
    }

    /// The smallest coordinate of this shape along `axis`, or `+∞` if it is empty.
    pub fn min(&self, axis: Axis) -> Real {
        let first = self.0.discrete.first_full(axis);

        if first >= self.0.discrete.size(axis) {
            Real::INFINITY
        } else {
            self.coord(axis, first)
        }
    }

    /// The largest coordinate of this shape along `axis`, or `-∞` if it is empty.
    pub fn max(&self, axis: Axis) -> Real {
        let last = self.0.discrete.last_full(axis);

        if last <= 0 {
            Real::NEG_INFINITY
        } else {
            self.coord(axis, last)
        }
    }

    /// The smallest coordinate along `axis` of the column of cells containing the positions
    /// `primary` and `secondary` on the two other axes (in cyclic order after `axis`).
    ///
    /// Returns `+∞` if that column is empty.
    pub fn min_at(&self, axis: Axis, primary: Real, secondary: Real) -> Real {
        let (y, z) = self.column_indices(axis, primary, secondary);
        let first = self.0.discrete.first_full_at(axis, y, z);

        if first >= self.0.discrete.size(axis) {
            Real::INFINITY
        } else {
            self.coord(axis, first)
        }
    }

    /// The largest coordinate along `axis` of the column of cells containing the positions
    /// `primary` and `secondary` on the two other axes (in cyclic order after `axis`).
    ///
    /// Returns `-∞` if that column is empty.
    pub fn max_at(&self, axis: Axis, primary: Real, secondary: Real) -> Real {
        let (y, z) = self.column_indices(axis, primary, secondary);
        let last = self.0.discrete.last_full_at(axis, y, z);

        if last <= 0 {
            Real::NEG_INFINITY
        } else {
            self.coord(axis, last)
        }
    }

    fn column_indices(&self, axis: Axis, primary: Real, secondary: Real) -> (i32, i32) {
        let y_axis = AxisCycle::Forward.cycle_axis(axis);
        let z_axis = AxisCycle::Backward.cycle_axis(axis);
        (
            self.find_index(y_axis, primary),
            self.find_index(z_axis, secondary),
        )
    }

    /// The smallest box containing this shape.
    ///
    /// Fails with [`ShapeError::EmptyBounds`] if the shape is empty.
    pub fn bounds(&self) -> Result<Aabb, ShapeError> {
        if self.is_empty() {
            return Err(ShapeError::EmptyBounds);
        }

        Ok(Aabb::new(
            Point::new(self.min(Axis::X), self.min(Axis::Y), self.min(Axis::Z)),
            Point::new(self.max(Axis::X), self.max(Axis::Y), self.max(Axis::Z)),
        ))
    }

    /// The bounds of this shape, as a single-box shape.
    pub fn single_encompassing(&self) -> VoxelShape {
        match self.bounds() {
            Ok(bounds) => shapes::create_unchecked(&bounds),
            Err(_) => shapes::empty(),
        }
    }

    /// This shape translated by `translation`.
    ///
    /// The grid is shared with `self`; only the coordinate lists are wrapped.
    pub fn translated(&self, translation: &Vector<Real>) -> VoxelShape {
        if self.is_empty() {
            return shapes::empty();
        }

        let coords = Axis::ALL.map(|axis| self.coordinates(axis).offset(translation[axis.index()]));
        Self::new_array(self.0.discrete.clone(), coords)
    }

    /// Rebuilds this shape as the union of its box decomposition.
    ///
    /// Split planes that separate no distinct cells are removed and the result covers the
    /// same solid with the fewest boxes. Applying it twice is the same as applying it once.
    pub fn optimize(&self) -> VoxelShape {
        let mut result = shapes::empty();

        self.for_all_boxes(|aabb| {
            result = shapes::join_valid(&result, &shapes::create_unchecked(&aabb), BooleanOp::Or);
        });

        result
    }

    #[inline]
    fn point_at(&self, cell: Point<i32>) -> Point<Real> {
        Point::new(
            self.coord(Axis::X, cell.x),
            self.coord(Axis::Y, cell.y),
            self.coord(Axis::Z, cell.z),
        )
    }

    /// Calls `consumer` on each box of the decomposition of this shape into maximal boxes.
    ///
    /// Boxes don't overlap, and are visited in a deterministic order.
    pub fn for_all_boxes(&self, mut consumer: impl FnMut(Aabb)) {
        self.0.discrete.for_all_boxes(
            |mins, maxs| consumer(Aabb::new(self.point_at(mins), self.point_at(maxs))),
            true,
        )
    }

    /// The decomposition of this shape into maximal non-overlapping boxes.
    pub fn to_aabbs(&self) -> Vec<Aabb> {
        let mut result = vec![];
        self.for_all_boxes(|aabb| result.push(aabb));
        result
    }

    /// Calls `consumer` on each edge of the wireframe of this shape.
    pub fn for_all_edges(&self, mut consumer: impl FnMut(Point<Real>, Point<Real>)) {
        self.0
            .discrete
            .for_all_edges(|a, b| consumer(self.point_at(a), self.point_at(b)), true)
    }

    /// The cross-section of this shape on its side facing `direction`.
    ///
    /// The result is a one-cell-thick slice through the outermost layer of cells of the unit
    /// block on that side, spanning `[0, 1]` along the axis of `direction`. It is computed
    /// once and memoized. Empty shapes, the full block, and shapes already spanning `[0, 1]`
    /// along that axis with a single cell are returned as-is.
    pub fn face_shape(&self, direction: Direction) -> VoxelShape {
        if self.is_empty() || self.ptr_eq(&shapes::block()) {
            return self.clone();
        }

        let axis = direction.axis();

        if self.is_unit_span(axis) {
            return self.clone();
        }

        self.0.faces[direction.index()]
            .get_or_init(|| {
                let position = match direction.axis_direction() {
                    AxisDirection::Positive => 0.9999999,
                    AxisDirection::Negative => 1.0e-7,
                };
                self.slice(axis, self.find_index(axis, position))
            })
            .clone()
    }

    fn is_unit_span(&self, axis: Axis) -> bool {
        let coords = self.coordinates(axis);
        coords.len() == 2
            && abs_diff_eq!(coords.first(), 0.0, epsilon = EPSILON)
            && abs_diff_eq!(coords.last(), 1.0, epsilon = EPSILON)
    }

    /// The cells of the layer `index` along `axis`, stretched to span `[0, 1]` along `axis`.
    ///
    /// Layers outside of the grid are empty.
    pub fn slice(&self, axis: Axis, index: i32) -> VoxelShape {
        let layer = SubShape::layer(self.0.discrete.clone(), axis, index);
        let mut coords = Axis::ALL.map(|a| self.coordinates(a));
        coords[axis.index()] = CoordinateList::Uniform(1);

        Self::from_repr(
            Arc::new(DiscreteVoxelShape::Sub(layer)),
            ShapeRepr::Slice { axis, coords },
        )
    }
}

impl fmt::Display for VoxelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Ok(bounds) => write!(f, "VoxelShape[{}]", bounds),
            Err(_) => write!(f, "EMPTY"),
        }
    }
}

impl fmt::Debug for VoxelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoxelShape")
            .field("kind", &self.kind())
            .field("size", &Axis::ALL.map(|axis| self.0.discrete.size(axis)))
            .field("bounds", &self.bounds().ok())
            .finish()
    }
}
