use na::Point3;
use voxel_shapes::math::Direction;
use voxel_shapes::shapes;

#[test]
fn ray_through_stair() {
    let stair = shapes::or(
        &shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap(),
        &shapes::cuboid(0.0, 0.5, 0.5, 1.0, 1.0, 1.0).unwrap(),
    );
    let pos = Point3::new(-2, 64, 7);

    // Straight down on the step.
    let hit = stair
        .clip(
            &Point3::new(-1.5, 66.0, 7.25),
            &Point3::new(-1.5, 63.0, 7.25),
            &pos,
        )
        .unwrap();
    assert_eq!(hit.direction, Direction::Up);
    assert_relative_eq!(hit.location, Point3::new(-1.5, 64.5, 7.25));

    // Straight down on the back.
    let hit = stair
        .clip(
            &Point3::new(-1.5, 66.0, 7.75),
            &Point3::new(-1.5, 63.0, 7.75),
            &pos,
        )
        .unwrap();
    assert_relative_eq!(hit.location.y, 65.0);

    // Horizontally against the riser.
    let hit = stair
        .clip(
            &Point3::new(-1.5, 64.75, 6.0),
            &Point3::new(-1.5, 64.75, 9.0),
            &pos,
        )
        .unwrap();
    assert_eq!(hit.direction, Direction::North);
    assert_relative_eq!(hit.location.z, 7.5);
    assert_eq!(hit.block_pos, pos);
}

#[test]
fn ray_starting_inside() {
    let hit = shapes::block()
        .clip(
            &Point3::new(0.5, 0.5, 0.5),
            &Point3::new(0.5, -1.0, 0.5),
            &Point3::origin(),
        )
        .unwrap();

    assert!(hit.inside);
    assert_eq!(hit.direction, Direction::Up);
}

#[test]
fn ray_missing_the_shape() {
    let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
    let hit = slab.clip(
        &Point3::new(-1.0, 0.75, 0.5),
        &Point3::new(2.0, 0.75, 0.5),
        &Point3::origin(),
    );
    assert!(hit.is_none());
}
