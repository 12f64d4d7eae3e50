use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisCycle, AxisDirection, Direction, Point, Real, Vector, EPSILON};

/// The first hit of a segment against a block's shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockHitResult {
    /// The hit point, in world space.
    pub location: Point<Real>,
    /// The side of the shape that was hit.
    pub direction: Direction,
    /// The position of the block whose shape was hit.
    pub block_pos: Point<i32>,
    /// Did the segment start inside of the shape?
    pub inside: bool,
}

/// Clips the segment `[start, end]` against the boxes `aabbs`, all translated by `block_pos`.
///
/// Only faces facing the segment can be hit: moving towards `+x` hits the `West` side of a
/// box. Returns the hit closest to `start`, or `None` if no box is crossed before `end`.
pub fn clip_aabbs<'a>(
    aabbs: impl IntoIterator<Item = &'a Aabb>,
    start: &Point<Real>,
    end: &Point<Real>,
    block_pos: &Point<i32>,
) -> Option<BlockHitResult> {
    let dir = end - start;
    let shift: Vector<Real> = block_pos.coords.cast::<Real>();
    let mut best_toi = 1.0;
    let mut hit_side = None;

    for aabb in aabbs {
        let aabb = aabb.translated(&shift);

        for axis in Axis::ALL {
            let side = if dir[axis.index()] > EPSILON {
                Direction::from_axis_and_direction(axis, AxisDirection::Negative)
            } else if dir[axis.index()] < -EPSILON {
                Direction::from_axis_and_direction(axis, AxisDirection::Positive)
            } else {
                continue;
            };

            if let Some(toi) = clip_face(&aabb, start, &dir, side, best_toi) {
                best_toi = toi;
                hit_side = Some(side);
            }
        }
    }

    hit_side.map(|direction| BlockHitResult {
        location: start + dir * best_toi,
        direction,
        block_pos: *block_pos,
        inside: false,
    })
}

/// The parameter at which the segment crosses the `side` face of `aabb`, if it lies in
/// `(0, max_toi)` and within the face bounds.
fn clip_face(
    aabb: &Aabb,
    start: &Point<Real>,
    dir: &Vector<Real>,
    side: Direction,
    max_toi: Real,
) -> Option<Real> {
    let axis = side.axis();
    let plane = match side.axis_direction() {
        AxisDirection::Negative => aabb.min(axis),
        AxisDirection::Positive => aabb.max(axis),
    };
    let toi = (plane - start[axis.index()]) / dir[axis.index()];

    if !(0.0 < toi && toi < max_toi) {
        return None;
    }

    let on_face = [AxisCycle::Forward, AxisCycle::Backward]
        .iter()
        .map(|cycle| cycle.cycle_axis(axis))
        .all(|other| {
            let coord = start[other.index()] + toi * dir[other.index()];
            aabb.min(other) - EPSILON < coord && coord < aabb.max(other) + EPSILON
        });

    on_face.then_some(toi)
}
