//! Construction and boolean algebra of voxel shapes.
//!
//! This module is the entry point to build shapes ([`cuboid`], [`create`], [`block`],
//! [`empty`], [`infinity`]) and to combine them ([`or`], [`join`], [`join_is_not_empty`]).
//! It also provides the occlusion predicates used to cull the faces between two adjacent
//! blocks, and the sweep of a moving box against several shapes ([`collide`]).

use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisDirection, Direction, Point, Real, EPSILON};
use crate::shape::{
    BitSetDiscreteVoxelShape, BooleanOp, CoordinateList, DiscreteVoxelShape, IndexMerger,
    ShapeError, VoxelShape,
};
use std::sync::{Arc, OnceLock};

static EMPTY: OnceLock<VoxelShape> = OnceLock::new();
static BLOCK: OnceLock<VoxelShape> = OnceLock::new();
static INFINITY: OnceLock<VoxelShape> = OnceLock::new();

/// The largest number of bits of subdivision tried when building a box as a uniform grid.
const MAX_SUBDIVISION_BITS: u32 = 3;

/// The shape containing nothing.
///
/// Always returns the same instance.
pub fn empty() -> VoxelShape {
    EMPTY
        .get_or_init(|| {
            let grid = BitSetDiscreteVoxelShape::empty_grid([0; 3]);
            VoxelShape::new_array(
                Arc::new(DiscreteVoxelShape::BitSet(grid)),
                Axis::ALL.map(|_| CoordinateList::explicit(vec![0.0])),
            )
        })
        .clone()
}

/// The unit cube `[0, 1]³`.
///
/// Always returns the same instance.
pub fn block() -> VoxelShape {
    BLOCK
        .get_or_init(|| {
            let grid = BitSetDiscreteVoxelShape::filled([1; 3], [0; 3], [1; 3]);
            VoxelShape::new_cube(Arc::new(DiscreteVoxelShape::BitSet(grid)))
        })
        .clone()
}

/// The shape filling the whole space.
pub fn infinity() -> VoxelShape {
    INFINITY
        .get_or_init(|| {
            VoxelShape::new_array(
                block().discrete_shared().clone(),
                Axis::ALL.map(|_| {
                    CoordinateList::explicit(vec![Real::NEG_INFINITY, Real::INFINITY])
                }),
            )
        })
        .clone()
}

/// The box `[min_x, max_x] × [min_y, max_y] × [min_z, max_z]`.
///
/// Fails if a minimum is greater than the matching maximum. See [`create`].
pub fn cuboid(
    min_x: Real,
    min_y: Real,
    min_z: Real,
    max_x: Real,
    max_y: Real,
    max_z: Real,
) -> Result<VoxelShape, ShapeError> {
    create(&Aabb::new(
        Point::new(min_x, min_y, min_z),
        Point::new(max_x, max_y, max_z),
    ))
}

/// The shape covering exactly `aabb`.
///
/// Boxes aligned on a grid of at most 8 subdivisions of the unit block are built as uniform
/// grids, which keeps later joins on the cheap discrete path. The unit block itself returns
/// the [`block`] singleton and boxes thinner than [`EPSILON`] return [`empty`].
pub fn create(aabb: &Aabb) -> Result<VoxelShape, ShapeError> {
    for axis in Axis::ALL {
        let (min, max) = (aabb.min(axis), aabb.max(axis));

        if min > max {
            return Err(ShapeError::InvalidBounds { axis, min, max });
        }
    }

    Ok(create_unchecked(aabb))
}

pub(crate) fn create_unchecked(aabb: &Aabb) -> VoxelShape {
    if aabb.extents().iter().any(|e| *e < EPSILON) {
        return empty();
    }

    let bits = Axis::ALL.map(|axis| find_bits(aabb.min(axis), aabb.max(axis)));

    match bits {
        [Some(0), Some(0), Some(0)] => block(),
        [Some(x_bits), Some(y_bits), Some(z_bits)] => {
            let size = [1 << x_bits, 1 << y_bits, 1 << z_bits];
            let to_cell = |value: Real, axis: Axis| (value * size[axis.index()] as Real).round() as i32;
            let mins = Axis::ALL.map(|axis| to_cell(aabb.min(axis), axis));
            let maxs = Axis::ALL.map(|axis| to_cell(aabb.max(axis), axis));
            let grid = BitSetDiscreteVoxelShape::filled(size, mins, maxs);
            VoxelShape::new_cube(Arc::new(DiscreteVoxelShape::BitSet(grid)))
        }
        _ => {
            log::trace!("Box {aabb} is not aligned on the block grid, using explicit coordinates.");
            let coords = Axis::ALL
                .map(|axis| CoordinateList::explicit(vec![aabb.min(axis), aabb.max(axis)]));
            VoxelShape::new_array(block().discrete_shared().clone(), coords)
        }
    }
}

/// The smallest number of bits `b` such that both bounds are multiples of `2^-b`, if the
/// bounds lie inside of the unit block.
fn find_bits(min: Real, max: Real) -> Option<u32> {
    if min < -EPSILON || max > 1.0 + EPSILON {
        return None;
    }

    (0..=MAX_SUBDIVISION_BITS).find(|bits| {
        let parts = (1u32 << bits) as Real;
        let min = min * parts;
        let max = max * parts;
        (min - min.round()).abs() < EPSILON * parts && (max - max.round()).abs() < EPSILON * parts
    })
}

/// The union of two shapes, optimized.
pub fn or(first: &VoxelShape, second: &VoxelShape) -> VoxelShape {
    join_valid(first, second, BooleanOp::Or).optimize()
}

/// The union of `first` with all the `others`, optimized.
pub fn or_all<'a>(
    first: &VoxelShape,
    others: impl IntoIterator<Item = &'a VoxelShape>,
) -> VoxelShape {
    others
        .into_iter()
        .fold(first.clone(), |acc, shape| or(&acc, shape))
}

/// Combines two shapes cell by cell with `op`, then optimizes the result.
///
/// Fails if `op` maps two empty cells to a full one.
pub fn join(
    first: &VoxelShape,
    second: &VoxelShape,
    op: BooleanOp,
) -> Result<VoxelShape, ShapeError> {
    Ok(join_unoptimized(first, second, op)?.optimize())
}

/// Combines two shapes cell by cell with `op`.
///
/// The result keeps every split plane of both inputs, so it may describe the solid with more
/// boxes than needed. Fails if `op` maps two empty cells to a full one.
pub fn join_unoptimized(
    first: &VoxelShape,
    second: &VoxelShape,
    op: BooleanOp,
) -> Result<VoxelShape, ShapeError> {
    if !op.is_meaningful() {
        return Err(ShapeError::MeaninglessOperator(op));
    }

    Ok(join_valid(first, second, op))
}

// NOTE: `op` must be meaningful.
pub(crate) fn join_valid(first: &VoxelShape, second: &VoxelShape, op: BooleanOp) -> VoxelShape {
    if first.ptr_eq(second) {
        return if op.apply(true, true) {
            first.clone()
        } else {
            empty()
        };
    }

    let keep_first = op.apply(true, false);
    let keep_second = op.apply(false, true);

    if first.is_empty() {
        return if keep_second { second.clone() } else { empty() };
    }

    if second.is_empty() {
        return if keep_first { first.clone() } else { empty() };
    }

    let [x, y, z] = mergers(first, second, keep_first, keep_second);
    let grid = BitSetDiscreteVoxelShape::join(first.discrete(), second.discrete(), &x, &y, &z, op);
    let grid = Arc::new(DiscreteVoxelShape::BitSet(grid));

    if x.is_discrete_cube() && y.is_discrete_cube() && z.is_discrete_cube() {
        VoxelShape::new_cube(grid)
    } else {
        VoxelShape::new_array(grid, [x, y, z].map(|merger| merger.list().clone()))
    }
}

fn mergers(
    first: &VoxelShape,
    second: &VoxelShape,
    keep_first: bool,
    keep_second: bool,
) -> [IndexMerger; 3] {
    let merger = |budget, axis| {
        IndexMerger::new(
            budget,
            &first.coordinates(axis),
            &second.coordinates(axis),
            keep_first,
            keep_second,
        )
    };

    let x = merger(1, Axis::X);
    let y = merger(x.len() - 1, Axis::Y);
    let z = merger((x.len() - 1) * (y.len() - 1), Axis::Z);
    [x, y, z]
}

/// Would `join(first, second, op)` contain any solid?
///
/// This never builds the joined grid and stops at the first full merged cell. Fails if `op`
/// maps two empty cells to a full one.
pub fn join_is_not_empty(
    first: &VoxelShape,
    second: &VoxelShape,
    op: BooleanOp,
) -> Result<bool, ShapeError> {
    if !op.is_meaningful() {
        return Err(ShapeError::MeaninglessOperator(op));
    }

    Ok(join_is_not_empty_valid(first, second, op))
}

// NOTE: `op` must be meaningful.
fn join_is_not_empty_valid(first: &VoxelShape, second: &VoxelShape, op: BooleanOp) -> bool {
    let first_empty = first.is_empty();
    let second_empty = second.is_empty();

    if first_empty || second_empty {
        return op.apply(!first_empty, !second_empty);
    }

    if first.ptr_eq(second) {
        return op.apply(true, true);
    }

    let keep_first = op.apply(true, false);
    let keep_second = op.apply(false, true);

    for axis in Axis::ALL {
        if first.max(axis) < second.min(axis) - EPSILON
            || second.max(axis) < first.min(axis) - EPSILON
        {
            return keep_first || keep_second;
        }
    }

    let [x_merger, y_merger, z_merger] = mergers(first, second, keep_first, keep_second);
    let (a, b) = (first.discrete(), second.discrete());

    let found = x_merger.intervals().any(|x| {
        y_merger.intervals().any(|y| {
            z_merger.intervals().any(|z| {
                op.apply(
                    a.is_full_wide(x.first, y.first, z.first),
                    b.is_full_wide(x.second, y.second, z.second),
                )
            })
        })
    });
    found
}

fn touches_max(shape: &VoxelShape, axis: Axis) -> bool {
    abs_diff_eq!(shape.max(axis), 1.0, epsilon = EPSILON)
}

fn touches_min(shape: &VoxelShape, axis: Axis) -> bool {
    abs_diff_eq!(shape.min(axis), 0.0, epsilon = EPSILON)
}

/// The outermost layer of `shape` on its side facing `direction`, or [`empty`] if the shape
/// doesn't reach the block boundary on that side.
///
/// Unlike [`VoxelShape::face_shape`], the result isn't memoized.
pub fn face_shape(shape: &VoxelShape, direction: Direction) -> VoxelShape {
    if shape.ptr_eq(&block()) {
        return block();
    }

    let axis = direction.axis();
    let (touches, index) = match direction.axis_direction() {
        AxisDirection::Positive => (touches_max(shape, axis), shape.discrete().size(axis) - 1),
        AxisDirection::Negative => (touches_min(shape, axis), 0),
    };

    if touches {
        shape.slice(axis, index)
    } else {
        empty()
    }
}

/// Orders `shape` and its `adjacent` neighbor across `side` so that the first one is the
/// lower one along the axis of `side`.
fn lower_and_upper<'a>(
    shape: &'a VoxelShape,
    adjacent: &'a VoxelShape,
    side: Direction,
) -> (&'a VoxelShape, &'a VoxelShape) {
    match side.axis_direction() {
        AxisDirection::Positive => (shape, adjacent),
        AxisDirection::Negative => (adjacent, shape),
    }
}

/// Is the face of `shape` on `side` entirely covered by `adjacent`, its neighbor on that side?
///
/// Both shapes are expressed in their own block space. The face of `shape` must reach the
/// block boundary, and so must the facing side of `adjacent`.
pub fn block_occludes(shape: &VoxelShape, adjacent: &VoxelShape, side: Direction) -> bool {
    let block = block();

    if shape.ptr_eq(&block) && adjacent.ptr_eq(&block) {
        return true;
    }

    if adjacent.is_empty() {
        return false;
    }

    let axis = side.axis();
    let (lower, upper) = lower_and_upper(shape, adjacent, side);
    let op = match side.axis_direction() {
        AxisDirection::Positive => BooleanOp::OnlyFirst,
        AxisDirection::Negative => BooleanOp::OnlySecond,
    };

    touches_max(lower, axis)
        && touches_min(upper, axis)
        && !join_is_not_empty_valid(
            &lower.slice(axis, lower.discrete().size(axis) - 1),
            &upper.slice(axis, 0),
            op,
        )
}

/// Do `shape` and `adjacent`, its neighbor on `side`, jointly cover the whole face they share?
pub fn merged_face_occludes(shape: &VoxelShape, adjacent: &VoxelShape, side: Direction) -> bool {
    let block = block();

    if shape.ptr_eq(&block) || adjacent.ptr_eq(&block) {
        return true;
    }

    if shape.is_empty() && adjacent.is_empty() {
        return false;
    }

    let axis = side.axis();
    let (lower, upper) = lower_and_upper(shape, adjacent, side);
    let empty = empty();
    let lower = if touches_max(lower, axis) { lower } else { &empty };
    let upper = if touches_min(upper, axis) { upper } else { &empty };

    let merged = join_valid(
        &lower.slice(axis, lower.discrete().size(axis) - 1),
        &upper.slice(axis, 0),
        BooleanOp::Or,
    );
    !join_is_not_empty_valid(&block, &merged, BooleanOp::OnlyFirst)
}

/// Do the two face shapes `first` and `second` jointly cover the whole unit face?
pub fn face_shape_occludes(first: &VoxelShape, second: &VoxelShape) -> bool {
    let block = block();

    if first.ptr_eq(&block) || second.ptr_eq(&block) {
        return true;
    }

    if first.is_empty() && second.is_empty() {
        return false;
    }

    let merged = join_valid(first, second, BooleanOp::Or);
    !join_is_not_empty_valid(&block, &merged, BooleanOp::OnlyFirst)
}

/// Sweeps `moving` along `axis` against every shape of `shapes`, in order.
///
/// Returns the offset, clamped from `desired`, at which `moving` stops when it first touches
/// one of the shapes. Returns `0.0` as soon as the offset becomes negligible.
pub fn collide<'a>(
    axis: Axis,
    moving: &Aabb,
    shapes: impl IntoIterator<Item = &'a VoxelShape>,
    mut desired: Real,
) -> Real {
    for shape in shapes {
        if desired.abs() < EPSILON {
            return 0.0;
        }

        desired = shape.collide(axis, moving, desired);
    }

    desired
}
