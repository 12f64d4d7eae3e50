use na::{Point3, Vector3};
use voxel_shapes::bounding_volume::Aabb;
use voxel_shapes::math::Axis;
use voxel_shapes::shape::{BooleanOp, ShapeError, ShapeKind};
use voxel_shapes::shapes;

fn unit_aabb() -> Aabb {
    Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}

#[test]
fn adjacent_halves_merge_into_one_box() {
    let left = shapes::cuboid(0.0, 0.0, 0.0, 0.5, 1.0, 1.0).unwrap();
    let right = shapes::cuboid(0.5, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();

    let union = shapes::or(&left, &right);
    assert_eq!(union.to_aabbs(), vec![unit_aabb()]);
    assert!(union.ptr_eq(&shapes::block()));

    let shift = Vector3::new(3.0, -2.0, 0.5);
    let moved = shapes::or(&left.translated(&shift), &right.translated(&shift));
    assert_eq!(moved.to_aabbs(), vec![unit_aabb().translated(&shift)]);
}

#[test]
fn unit_box_is_the_block_singleton() {
    let unit = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    assert!(unit.ptr_eq(&shapes::block()));
    assert_eq!(unit.to_aabbs(), vec![unit_aabb()]);
    assert!(shapes::create(&unit_aabb()).unwrap().ptr_eq(&shapes::block()));
}

#[test]
fn union_with_empty_is_identity() {
    let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
    assert_eq!(
        shapes::or(&slab, &shapes::empty()).to_aabbs(),
        slab.to_aabbs()
    );
    assert_eq!(
        shapes::or(&shapes::empty(), &slab).to_aabbs(),
        slab.to_aabbs()
    );
}

#[test]
fn meaningless_operators_are_rejected() {
    let block = shapes::block();

    for op in [BooleanOp::True, BooleanOp::NotOr, BooleanOp::Same, BooleanOp::NotAnd] {
        assert_eq!(
            shapes::join(&block, &block, op).err(),
            Some(ShapeError::MeaninglessOperator(op))
        );
        assert_eq!(
            shapes::join_is_not_empty(&block, &block, op),
            Err(ShapeError::MeaninglessOperator(op))
        );
    }
}

#[test]
fn difference_and_intersection() {
    let block = shapes::block();
    let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();

    let top = shapes::join(&block, &slab, BooleanOp::OnlyFirst).unwrap();
    assert_eq!(
        top.to_aabbs(),
        vec![Aabb::new(
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(1.0, 1.0, 1.0)
        )]
    );

    let bottom = shapes::join(&block, &slab, BooleanOp::And).unwrap();
    assert_eq!(bottom.to_aabbs(), slab.to_aabbs());

    assert!(shapes::join(&slab, &top, BooleanOp::And).unwrap().is_empty());
    assert!(shapes::join(&block, &block, BooleanOp::XOR)
        .unwrap()
        .is_empty());
}

#[test]
fn union_of_unaligned_boxes() {
    let a = shapes::cuboid(0.1, 0.0, 0.0, 0.6, 1.0, 1.0).unwrap();
    let b = shapes::cuboid(0.4, 0.0, 0.0, 0.9, 1.0, 1.0).unwrap();
    assert_eq!(a.kind(), ShapeKind::Array);

    let union = shapes::or(&a, &b);
    let boxes = union.to_aabbs();
    assert_eq!(boxes.len(), 1);
    assert_relative_eq!(boxes[0].mins, Point3::new(0.1, 0.0, 0.0));
    assert_relative_eq!(boxes[0].maxs, Point3::new(0.9, 1.0, 1.0));
}

#[test]
fn or_all_folds_every_shape() {
    let quarters: Vec<_> = (0..4)
        .map(|i| {
            let y = i as f64 * 0.25;
            shapes::cuboid(0.0, y, 0.0, 1.0, y + 0.25, 1.0).unwrap()
        })
        .collect();

    let union = shapes::or_all(&shapes::empty(), &quarters);
    assert!(union.ptr_eq(&shapes::block()));
}

#[test]
fn join_is_not_empty_on_disjoint_ranges() {
    let a = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    let b = shapes::block().translated(&Vector3::new(2.0, 0.0, 0.0));

    assert_eq!(shapes::join_is_not_empty(&a, &b, BooleanOp::And), Ok(false));
    assert_eq!(shapes::join_is_not_empty(&a, &b, BooleanOp::Or), Ok(true));
    assert_eq!(
        shapes::join_is_not_empty(&a, &shapes::empty(), BooleanOp::OnlySecond),
        Ok(false)
    );
}

#[test]
fn join_is_not_empty_matches_join() {
    let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
    let pillar = shapes::cuboid(0.25, 0.0, 0.25, 0.75, 1.0, 0.75).unwrap();
    let top = shapes::cuboid(0.0, 0.5, 0.0, 1.0, 1.0, 1.0).unwrap();

    for (a, b) in [(&slab, &pillar), (&slab, &top), (&pillar, &top)] {
        for op in [
            BooleanOp::And,
            BooleanOp::OnlyFirst,
            BooleanOp::OnlySecond,
            BooleanOp::NotSame,
            BooleanOp::Or,
        ] {
            let joined = shapes::join(a, b, op).unwrap();
            assert_eq!(
                shapes::join_is_not_empty(a, b, op).unwrap(),
                !joined.is_empty(),
                "{op:?} between {a} and {b}"
            );
        }
    }
}

#[test]
fn single_encompassing_and_bounds() {
    let stair = shapes::or(
        &shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap(),
        &shapes::cuboid(0.0, 0.5, 0.5, 1.0, 1.0, 1.0).unwrap(),
    );

    assert_eq!(stair.bounds().unwrap(), unit_aabb());
    assert!(stair.single_encompassing().ptr_eq(&shapes::block()));
    assert_eq!(stair.min(Axis::Y), 0.0);
    assert_eq!(stair.max(Axis::Z), 1.0);
}

#[test]
fn translated_shapes_keep_their_boxes() {
    let slab = shapes::cuboid(0.0, 0.0, 0.0, 1.0, 0.5, 1.0).unwrap();
    let shift = Vector3::new(-3.0, 10.0, 0.5);

    let moved: Vec<_> = slab.translated(&shift).to_aabbs();
    let expected: Vec<_> = slab.to_aabbs().iter().map(|b| b.translated(&shift)).collect();
    assert_eq!(moved, expected);
    assert!(shapes::empty().translated(&shift).ptr_eq(&shapes::empty()));
}
