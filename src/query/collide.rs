use crate::bounding_volume::Aabb;
use crate::math::{Axis, AxisCycle, Real, EPSILON};
use crate::shape::VoxelShape;

impl VoxelShape {
    /// Sweeps `moving` by `desired` along `axis` and returns how far it can go before
    /// touching this shape.
    ///
    /// The result has the sign of `desired` and a magnitude no greater than it. Only the
    /// cells of this shape overlapping `moving` on the two other axes (by more than
    /// [`EPSILON`]) and lying ahead of it along `axis` can block it. Returns `0.0` if the
    /// desired offset is negligible, and `desired` unchanged if this shape is empty.
    pub fn collide(&self, axis: Axis, moving: &Aabb, desired: Real) -> Real {
        if self.is_empty() {
            return desired;
        }

        if desired.abs() < EPSILON {
            return 0.0;
        }

        // Rotate the frame so that `axis` becomes `x`.
        let cycle = AxisCycle::between(axis, Axis::X).inverse();
        let [sweep_axis, y_axis, z_axis] = Axis::ALL.map(|a| cycle.cycle_axis(a));
        let discrete = self.discrete();

        let moving_max = moving.max(sweep_axis);
        let moving_min = moving.min(sweep_axis);
        let first = self.find_index(sweep_axis, moving_min + EPSILON);
        let last = self.find_index(sweep_axis, moving_max - EPSILON);

        let y_min = self
            .find_index(y_axis, moving.min(y_axis) + EPSILON)
            .max(0);
        let y_max = (self.find_index(y_axis, moving.max(y_axis) - EPSILON) + 1)
            .min(discrete.size(y_axis));
        let z_min = self
            .find_index(z_axis, moving.min(z_axis) + EPSILON)
            .max(0);
        let z_max = (self.find_index(z_axis, moving.max(z_axis) - EPSILON) + 1)
            .min(discrete.size(z_axis));

        let is_blocking = |i: i32| {
            (y_min..y_max)
                .any(|j| (z_min..z_max).any(|k| discrete.is_full_wide_cycled(cycle, i, j, k)))
        };

        if desired > 0.0 {
            let size = discrete.size(sweep_axis);

            if let Some(i) = (last + 1..size).find(|i| is_blocking(*i)) {
                let gap = self.coord(sweep_axis, i) - moving_max;

                if gap >= -EPSILON {
                    return desired.min(gap);
                }
            }
        } else if let Some(i) = (0..first).rev().find(|i| is_blocking(*i)) {
            let gap = self.coord(sweep_axis, i + 1) - moving_min;

            if gap <= EPSILON {
                return desired.max(gap);
            }
        }

        desired
    }
}
