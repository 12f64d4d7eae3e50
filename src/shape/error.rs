use crate::math::{Axis, Real};
use crate::shape::BooleanOp;

/// Indicated a violated precondition while building or combining voxel shapes.
///
/// Every variant is a caller bug: the engine never retries nor returns partial results.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The minimum of a box is greater than its maximum along one axis.
    #[error("the min values need to be smaller or equal to the max values (axis {axis:?}: {min} > {max})")]
    InvalidBounds {
        /// The axis with inverted bounds.
        axis: Axis,
        /// The requested minimum.
        min: Real,
        /// The requested maximum.
        max: Real,
    },
    /// A discrete grid was requested with a negative dimension.
    #[error("need all positive sizes: x: {x}, y: {y}, z: {z}")]
    NegativeSize {
        /// The requested size along `x`.
        x: i32,
        /// The requested size along `y`.
        y: i32,
        /// The requested size along `z`.
        z: i32,
    },
    /// The number of split planes along an axis doesn't match the grid size plus one.
    #[error("lengths of point arrays must be consistent with the size of the voxel shape (axis {axis:?}: expected {expected}, found {found})")]
    InconsistentCoordinates {
        /// The axis with an inconsistent coordinate list.
        axis: Axis,
        /// The expected number of coordinates.
        expected: usize,
        /// The actual number of coordinates.
        found: usize,
    },
    /// A uniform coordinate list needs at least one part.
    #[error("need at least 1 part")]
    InvalidSubdivision,
    /// The boolean operator yields `true` on two empty inputs.
    #[error("the operator {0:?} maps (false, false) to true")]
    MeaninglessOperator(BooleanOp),
    /// An empty shape has no bounds.
    #[error("no bounds for empty shape")]
    EmptyBounds,
}
