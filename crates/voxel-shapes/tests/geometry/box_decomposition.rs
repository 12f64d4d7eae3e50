use na::Point3;
use voxel_shapes::bounding_volume::Aabb;
use voxel_shapes::math::Axis;
use voxel_shapes::shape::{BitSetDiscreteVoxelShape, DiscreteVoxelShape, VoxelShape};
use voxel_shapes::shapes;

fn stair() -> VoxelShape {
    shapes::or(
        &shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap(),
        &shapes::cuboid(0.0, 0.5, 0.5, 1.0, 1.0, 1.0).unwrap(),
    )
}

#[test]
fn stair_decomposes_into_two_boxes() {
    assert_eq!(
        stair().to_aabbs(),
        vec![
            Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.5, 1.0)),
            Aabb::new(Point3::new(0.0, 0.5, 0.5), Point3::new(1.0, 1.0, 1.0)),
        ]
    );
}

#[test]
fn wireframe_edges() {
    let mut block_edges = 0;
    shapes::block().for_all_edges(|_, _| block_edges += 1);
    assert_eq!(block_edges, 12);

    let mut stair_edges = vec![];
    stair().for_all_edges(|a, b| stair_edges.push((a, b)));
    assert_eq!(stair_edges.len(), 18);
    // The inner corner of the step.
    assert!(stair_edges.contains(&(Point3::new(0.0, 0.5, 0.5), Point3::new(1.0, 0.5, 0.5))));
    // No edge across the flat bottom.
    assert!(!stair_edges.contains(&(Point3::new(0.0, 0.0, 0.5), Point3::new(1.0, 0.0, 0.5))));
}

#[test]
fn hollow_cube_faces_and_interior() {
    let mut grid = BitSetDiscreteVoxelShape::new(3, 3, 3).unwrap();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                if (x, y, z) != (1, 1, 1) {
                    grid.fill(x, y, z);
                }
            }
        }
    }
    let hollow = DiscreteVoxelShape::BitSet(grid);

    let mut faces = 0;
    hollow.for_all_faces(|_, _| faces += 1);
    // 9 outer faces per side, plus the 6 faces around the hole.
    assert_eq!(faces, 6 * 9 + 6);

    assert!(!hollow.is_interior(1, 1, 1));
    assert!(!hollow.is_interior(0, 0, 0));
    assert!(hollow.free_faces(1, 1, 0).bits().count_ones() == 2);

    let mut boxes = 0;
    hollow.for_all_boxes(|_, _| boxes += 1, true);
    assert!(boxes > 1);

    assert_eq!(hollow.first_full_at(Axis::Y, 1, 1), 0);
    assert_eq!(hollow.last_full_at(Axis::Y, 1, 1), 3);
}

#[test]
fn box_volumes_add_up() {
    let shape = shapes::or_all(
        &shapes::cuboid(0.0, 0.0, 0.0, 0.5, 0.5, 0.5).unwrap(),
        &[
            shapes::cuboid(0.5, 0.0, 0.0, 1.0, 0.25, 1.0).unwrap(),
            shapes::cuboid(0.0, 0.75, 0.0, 1.0, 1.0, 0.125).unwrap(),
        ],
    );

    let volume: f64 = shape.to_aabbs().iter().map(|b| b.volume()).sum();
    assert_relative_eq!(volume, 0.125 + 0.125 + 0.03125);

    let boxes = shape.to_aabbs();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            assert!(!a.intersects(b), "{a} overlaps {b}");
        }
    }
}
