//! Non-persistent geometric queries on voxel shapes.
//!
//! * [`VoxelShape::collide`](crate::shape::VoxelShape::collide) sweeps a box along one axis
//!   until it touches a shape. [`shapes::collide`](crate::shapes::collide) chains it over
//!   several shapes.
//! * [`VoxelShape::clip`](crate::shape::VoxelShape::clip) finds where a segment first enters
//!   a shape placed in the world.
//! * [`VoxelShape::closest_point_to`](crate::shape::VoxelShape::closest_point_to) projects a
//!   point on a shape.

pub use self::clip::{clip_aabbs, BlockHitResult};

mod clip;
mod closest_point;
mod collide;
