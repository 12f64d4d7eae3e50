use super::{clip_aabbs, BlockHitResult};
use crate::math::{Axis, Direction, Point, Real, EPSILON};
use crate::shape::VoxelShape;

impl VoxelShape {
    /// Clips the segment `[start, end]` against this shape placed at `block_pos`.
    ///
    /// If the segment starts inside of the shape, the hit is reported at a point slightly
    /// past `start`, with `inside` set and facing against the segment direction.
    pub fn clip(
        &self,
        start: &Point<Real>,
        end: &Point<Real>,
        block_pos: &Point<i32>,
    ) -> Option<BlockHitResult> {
        if self.is_empty() {
            return None;
        }

        let dir = end - start;

        if dir.norm_squared() < EPSILON {
            return None;
        }

        let nudged = start + dir * 0.001;
        let cell = Axis::ALL.map(|axis| {
            self.find_index(
                axis,
                nudged[axis.index()] - block_pos[axis.index()] as Real,
            )
        });

        if self.discrete().is_full_wide(cell[0], cell[1], cell[2]) {
            Some(BlockHitResult {
                location: nudged,
                direction: Direction::nearest(dir.x, dir.y, dir.z).opposite(),
                block_pos: *block_pos,
                inside: true,
            })
        } else {
            clip_aabbs(self.to_aabbs().iter(), start, end, block_pos)
        }
    }
}
