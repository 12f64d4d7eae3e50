//! Voxel shapes and their building blocks.

pub use self::boolean_op::BooleanOp;
pub use self::coordinates::CoordinateList;
pub use self::discrete::{BitSetDiscreteVoxelShape, DiscreteVoxelShape, SubShape};
pub use self::error::ShapeError;
pub use self::merger::{
    DiscreteCubeMerger, IdenticalMerger, IndexMerger, IndirectMerger, MergedIndex,
    NonOverlappingMerger, MAX_DISCRETE_CUBE_CELLS,
};
pub use self::voxel_shape::{ShapeKind, VoxelShape};

mod boolean_op;
mod coordinates;
pub mod discrete;
mod error;
pub mod merger;
mod voxel_shape;
