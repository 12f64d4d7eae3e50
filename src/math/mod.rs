//! Aliases for mathematical types, and the axis/direction vocabulary shared by every shape.

pub use self::axis::{Axis, AxisCycle};
pub use self::direction::{AxisDirection, AxisMask, Direction};
pub use na::{Point3, Vector3};

mod axis;
mod direction;

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The dimension of the space.
pub const DIM: usize = 3;

/// Tolerance under which two split-plane coordinates are considered identical.
///
/// This value is part of the observable contract of every query: two boundaries closer
/// than `EPSILON` are merged, and a box closer than `EPSILON` to a shape is touching it.
pub const EPSILON: Real = 1.0e-7;

/// Coarser tolerance used for face-alignment checks.
pub const BIG_EPSILON: Real = 1.0e-6;
