use crate::math::{Point, Real};
use crate::shape::VoxelShape;

impl VoxelShape {
    /// The point of this shape closest to `point`, or `None` if this shape is empty.
    ///
    /// Points inside of the shape are their own projection.
    pub fn closest_point_to(&self, point: &Point<Real>) -> Option<Point<Real>> {
        let mut best: Option<(Point<Real>, Real)> = None;

        self.for_all_boxes(|aabb| {
            let candidate = aabb.clamp_point(point);
            let dist = na::distance_squared(point, &candidate);

            if best.map(|(_, best_dist)| dist < best_dist).unwrap_or(true) {
                best = Some((candidate, dist));
            }
        });

        best.map(|(closest, _)| closest)
    }
}
