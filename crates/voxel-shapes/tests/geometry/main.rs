#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod box_decomposition;
mod collide;
mod face_occlusion;
mod index_merger;
mod random_shapes;
mod ray_clip;
mod shape_algebra;
