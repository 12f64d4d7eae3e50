// Seeded randomized checks over unions of boxes aligned on the 1/8th grid.

use na::{Point3, Vector3};
use oorandom::Rand32;
use voxel_shapes::bounding_volume::Aabb;
use voxel_shapes::math::Axis;
use voxel_shapes::shape::{BooleanOp, VoxelShape};
use voxel_shapes::shapes;

fn random_aabb(rng: &mut Rand32) -> Aabb {
    let mut mins = Point3::origin();
    let mut maxs = Point3::origin();

    for i in 0..3 {
        let min = rng.rand_range(0..8);
        let max = rng.rand_range(min + 1..9);
        mins[i] = min as f64 / 8.0;
        maxs[i] = max as f64 / 8.0;
    }

    Aabb::new(mins, maxs)
}

fn random_shape(rng: &mut Rand32) -> VoxelShape {
    let count = rng.rand_range(1..4);
    (0..count).fold(shapes::empty(), |acc, _| {
        shapes::or(&acc, &shapes::create(&random_aabb(rng)).unwrap())
    })
}

fn volume(shape: &VoxelShape) -> f64 {
    shape.to_aabbs().iter().map(|b| b.volume()).sum()
}

fn same_boxes(a: &[Aabb], b: &[Aabb]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

#[test]
fn optimize_is_idempotent() {
    let mut rng = Rand32::new(1);

    for _ in 0..100 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        let raw = shapes::join_unoptimized(&a, &b, BooleanOp::Or).unwrap();

        let once = raw.optimize();
        let twice = once.optimize();
        assert_eq!(once.to_aabbs(), twice.to_aabbs());
        assert_relative_eq!(volume(&raw), volume(&once));
    }
}

#[test]
fn union_is_already_optimized() {
    let mut rng = Rand32::new(5);

    for _ in 0..100 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        let union = shapes::or(&a, &b);

        assert_eq!(union.to_aabbs(), union.optimize().to_aabbs());
    }
}

#[test]
fn union_is_commutative() {
    let mut rng = Rand32::new(2);

    for _ in 0..100 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);

        assert!(same_boxes(
            &shapes::or(&a, &b).to_aabbs(),
            &shapes::or(&b, &a).to_aabbs()
        ));
        assert!(same_boxes(
            &shapes::or(&a, &shapes::empty()).to_aabbs(),
            &a.optimize().to_aabbs()
        ));
    }
}

#[test]
fn inclusion_exclusion() {
    let mut rng = Rand32::new(3);

    for _ in 0..100 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        let union = shapes::or(&a, &b);
        let inter = shapes::join(&a, &b, BooleanOp::And).unwrap();
        let only_a = shapes::join(&a, &b, BooleanOp::OnlyFirst).unwrap();

        assert_relative_eq!(
            volume(&union),
            volume(&a) + volume(&b) - volume(&inter),
            epsilon = 1.0e-9
        );
        assert_relative_eq!(
            volume(&only_a) + volume(&inter),
            volume(&a),
            epsilon = 1.0e-9
        );
        assert_eq!(
            shapes::join_is_not_empty(&a, &b, BooleanOp::And).unwrap(),
            !inter.is_empty()
        );
    }
}

#[test]
fn sweeps_never_overshoot() {
    let mut rng = Rand32::new(4);

    for _ in 0..200 {
        let shape = random_shape(&mut rng);
        let start = random_aabb(&mut rng).translated(&Vector3::new(0.0, 2.0, 0.0));
        let desired = -(rng.rand_range(1..40) as f64) / 8.0;

        let offset = shape.collide(Axis::Y, &start, desired);
        assert!(offset <= 0.0 && offset >= desired, "{offset} not in [{desired}, 0]");

        let end = start.translated(&Vector3::new(0.0, offset, 0.0));
        let end_shape = shapes::create(&end).unwrap();
        assert!(
            !shapes::join_is_not_empty(&shape, &end_shape, BooleanOp::And).unwrap(),
            "{end} ends inside {shape}"
        );

        if offset > desired {
            // Blocked: the box rests on the shape.
            let below = end.translated(&Vector3::new(0.0, -0.125, 0.0));
            assert!(shapes::join_is_not_empty(
                &shape,
                &shapes::create(&below).unwrap(),
                BooleanOp::And
            )
            .unwrap());
        }
    }
}
