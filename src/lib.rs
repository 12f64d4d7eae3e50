/*!
voxel-shapes
============

**voxel-shapes** is a 3-dimensional library for block-aligned solids written with the
rust programming language.

A [`VoxelShape`](shape::VoxelShape) describes a solid made of axis-aligned boxes as a
discrete occupancy grid plus the real coordinates of its split planes. Shapes can be
combined with any boolean operator, decomposed into boxes, swept against moving boxes,
clipped by segments, and tested for face occlusion.

```rust
use voxel_shapes::bounding_volume::Aabb;
use voxel_shapes::math::{Axis, Point};
use voxel_shapes::shapes;

let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
let top = shapes::cuboid(0.0, 0.5, 0.0, 1.0, 1.0, 1.0).unwrap();
assert!(shapes::or(&slab, &top).ptr_eq(&shapes::block()));

let falling = Aabb::new(Point::new(0.0, 3.0, 0.0), Point::new(1.0, 4.0, 1.0));
assert_eq!(shapes::collide(Axis::Y, &falling, [&slab], -5.0), -2.5);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod shapes;
pub mod utils;
