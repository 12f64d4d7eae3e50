use na::{Point3, Vector3};
use voxel_shapes::bounding_volume::Aabb;
use voxel_shapes::math::Axis;
use voxel_shapes::shapes;

fn unit_box_at(x: f64, y: f64, z: f64) -> Aabb {
    Aabb::new(Point3::new(x, y, z), Point3::new(x + 1.0, y + 1.0, z + 1.0))
}

#[test]
fn falling_box_lands_on_block() {
    let moving = unit_box_at(0.0, 3.0, 0.0);
    let offset = shapes::collide(Axis::Y, &moving, [&shapes::block()], -5.0);
    assert_eq!(offset, -2.0);
}

#[test]
fn nearest_shape_wins() {
    let world = [
        shapes::block(),
        shapes::block().translated(&Vector3::new(0.0, 1.0, 0.0)),
        shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0)
            .unwrap()
            .translated(&Vector3::new(0.0, -4.0, 0.0)),
    ];
    let moving = unit_box_at(0.0, 5.0, 0.0);

    assert_eq!(shapes::collide(Axis::Y, &moving, &world, -10.0), -3.0);
    // Going up is free.
    assert_eq!(shapes::collide(Axis::Y, &moving, &world, 10.0), 10.0);
}

#[test]
fn sliding_against_a_wall() {
    let wall = shapes::cuboid(0.0, 0.0, 0.875, 1.0, 1.0, 1.0).unwrap();
    let moving = Aabb::new(Point3::new(0.2, 0.0, 0.2), Point3::new(0.8, 1.8, 0.8));

    assert_relative_eq!(wall.collide(Axis::Z, &moving, 1.0), 0.075);
    assert_eq!(wall.collide(Axis::X, &moving, 1.0), 1.0);
    assert_eq!(wall.collide(Axis::Z, &moving, -1.0), -1.0);
}

#[test]
fn stopped_motion_is_zero() {
    let moving = unit_box_at(0.0, 1.0, 0.0);
    assert_eq!(shapes::collide(Axis::Y, &moving, [&shapes::block()], -1.0), 0.0);
    assert_eq!(
        shapes::collide(Axis::Y, &moving, [&shapes::block(), &shapes::infinity()], -1.0),
        0.0
    );
}
