pub use self::clip_aabb_segment::{clip_aabbs, BlockHitResult};

mod clip_aabb_segment;
mod clip_voxel_shape;
