//! Axis Aligned Bounding Box.

use crate::math::{Axis, Point, Real, Vector, DIM};
use core::fmt;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel to
/// the coordinate axes, making it very fast to test and compute.
///
/// This is the box type consumed by the collision sweeps of [`VoxelShape`](crate::shape::VoxelShape)
/// (the moving box), and produced by its box decomposition
/// ([`VoxelShape::to_aabbs`](crate::shape::VoxelShape::to_aabbs)).
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis
/// - **maxs**: The point with the largest coordinates on each axis
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, and `mins.z ≤ maxs.z`
///
/// # Example
///
/// ```rust
/// use voxel_shapes::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
///
/// assert!(aabb.contains_local_point(&Point3::origin()));
/// assert_eq!(aabb.center(), Point3::origin());
/// assert_eq!(aabb.extents().x, 1.0);
/// assert_eq!(aabb.half_extents().x, 0.5);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest coordinate of this AABB along `axis`.
    #[inline]
    pub fn min(&self, axis: Axis) -> Real {
        self.mins[axis.index()]
    }

    /// The largest coordinate of this AABB along `axis`.
    #[inline]
    pub fn max(&self, axis: Axis) -> Real {
        self.maxs[axis.index()]
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Returns an AABB with the same size as `self` but translated by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb::new(
            self.mins + Vector::repeat(-amount),
            self.maxs + Vector::repeat(amount),
        )
    }

    /// The AABB swept by `self` when it is translated by `motion`.
    ///
    /// Negative components of `motion` extend the minimum corner, positive ones the
    /// maximum corner.
    ///
    /// ```rust
    /// use voxel_shapes::bounding_volume::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    /// let swept = aabb.expanded_towards(&Vector3::new(2.0, -3.0, 0.0));
    /// assert_eq!(swept.mins, Point3::new(0.0, -3.0, 0.0));
    /// assert_eq!(swept.maxs, Point3::new(3.0, 1.0, 1.0));
    /// ```
    pub fn expanded_towards(&self, motion: &Vector<Real>) -> Aabb {
        let mut result = *self;

        for i in 0..DIM {
            if motion[i] < 0.0 {
                result.mins[i] += motion[i];
            } else {
                result.maxs[i] += motion[i];
            }
        }

        result
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Do `self` and `other` overlap with a non-zero volume?
    ///
    /// Boxes that merely touch along a face, an edge, or a vertex do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] < other.maxs[i] && other.mins[i] < self.maxs[i])
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The point of this AABB closest to `point`.
    #[inline]
    pub fn clamp_point(&self, point: &Point<Real>) -> Point<Real> {
        point.sup(&self.mins).inf(&self.maxs)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aabb[{}, {}, {}] -> [{}, {}, {}]",
            self.mins.x, self.mins.y, self.mins.z, self.maxs.x, self.maxs.y, self.maxs.z
        )
    }
}
