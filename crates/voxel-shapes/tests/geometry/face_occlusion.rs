use voxel_shapes::math::Direction;
use voxel_shapes::shape::VoxelShape;
use voxel_shapes::shapes;

fn slab() -> VoxelShape {
    shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap()
}

fn pillar() -> VoxelShape {
    shapes::cuboid(0.25, 0.0, 0.25, 0.75, 1.0, 0.75).unwrap()
}

#[test]
fn full_blocks_occlude_each_other() {
    for side in Direction::ALL {
        assert!(shapes::block_occludes(
            &shapes::block(),
            &shapes::block(),
            side
        ));
    }
}

#[test]
fn block_occlusion_needs_a_full_shared_face() {
    let block = shapes::block();

    // A slab on top of a block covers the block's top face.
    assert!(shapes::block_occludes(&block, &slab(), Direction::Up));
    // A block under a slab covers the slab's bottom face.
    assert!(shapes::block_occludes(&slab(), &block, Direction::Down));
    // The top of a bottom slab never reaches the block above.
    assert!(!shapes::block_occludes(&slab(), &block, Direction::Up));
    // A pillar only covers the center of the face.
    assert!(!shapes::block_occludes(&block, &pillar(), Direction::Up));
    assert!(!shapes::block_occludes(&block, &shapes::empty(), Direction::Up));
}

#[test]
fn halves_jointly_cover_a_face() {
    // Bottom half against the east side, top half against the west side of the next block.
    let bottom = shapes::cuboid(0.5, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
    let top = shapes::cuboid(0.0, 0.5, 0.0, 0.5, 1.0, 1.0).unwrap();
    let top_away = shapes::cuboid(0.5, 0.5, 0.0, 1.0, 1.0, 1.0).unwrap();

    assert!(shapes::merged_face_occludes(&bottom, &top, Direction::East));
    assert!(!shapes::merged_face_occludes(&bottom, &top_away, Direction::East));
    assert!(!shapes::merged_face_occludes(
        &shapes::empty(),
        &shapes::empty(),
        Direction::East
    ));
    assert!(shapes::merged_face_occludes(
        &shapes::empty(),
        &shapes::block(),
        Direction::East
    ));

    let bottom_face = shapes::face_shape(&bottom, Direction::East);
    let top_face = shapes::face_shape(&top, Direction::West);
    assert!(shapes::face_shape_occludes(&bottom_face, &top_face));
    assert!(!shapes::face_shape_occludes(&bottom_face, &shapes::empty()));
    assert!(shapes::face_shape_occludes(&shapes::block(), &shapes::empty()));
}

#[test]
fn face_shapes_of_a_slab() {
    let slab = slab();

    assert!(shapes::face_shape(&slab, Direction::Up).ptr_eq(&shapes::empty()));
    assert!(!shapes::face_shape(&slab, Direction::Down).is_empty());
    assert!(shapes::face_shape(&shapes::block(), Direction::Up).ptr_eq(&shapes::block()));

    let north = shapes::face_shape(&slab, Direction::North);
    let cached = slab.face_shape(Direction::North);
    assert_eq!(north.to_aabbs(), cached.to_aabbs());
}
