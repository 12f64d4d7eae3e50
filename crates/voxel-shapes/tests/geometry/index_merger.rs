use voxel_shapes::math::EPSILON;
use voxel_shapes::shape::{CoordinateList, IndexMerger};
use voxel_shapes::utils;

#[test]
fn uniform_merges_have_lcm_intervals() {
    for a in 1..=8 {
        for b in 1..=8 {
            let first = CoordinateList::uniform(a).unwrap();
            let second = CoordinateList::uniform(b).unwrap();
            let merger = IndexMerger::new(1, &first, &second, true, true);

            assert!(merger.is_discrete_cube());
            assert_eq!(merger.intervals().len() as u64, utils::lcm(a, b));

            let merged: Vec<_> = merger.list().iter().collect();
            for value in first.iter().chain(second.iter()) {
                assert!(
                    merged.iter().any(|m| (m - value).abs() < EPSILON),
                    "{value} missing from the merge of {a} and {b} parts"
                );
            }
        }
    }
}

#[test]
fn merged_intervals_lie_inside_their_sources() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let first = random_list(&mut rng);
        let second = random_list(&mut rng);
        let merger = IndexMerger::new(1, &first, &second, true, true);
        let merged = merger.list();

        for w in merged.iter().collect::<Vec<_>>().windows(2) {
            assert!(w[1] - w[0] >= EPSILON, "merged list isn't increasing: {w:?}");
        }

        for interval in merger.intervals() {
            let lo = merged.value_at(interval.merged as usize);
            let hi = merged.value_at(interval.merged as usize + 1);
            let mid = (lo + hi) / 2.0;

            for (list, id) in [(&first, interval.first), (&second, interval.second)] {
                let covered = id >= 0
                    && (id as usize) + 1 < list.len()
                    && list.value_at(id as usize) <= mid
                    && mid <= list.value_at(id as usize + 1);
                let inside = list.first() <= mid && mid <= list.last();
                assert_eq!(covered, inside, "interval {interval:?} of {merged:?}");
            }
        }
    }
}

fn random_list(rng: &mut oorandom::Rand32) -> CoordinateList {
    let len = rng.rand_range(2..6) as usize;
    let mut values: Vec<f64> = (0..len)
        .map(|_| rng.rand_range(0..33) as f64 / 16.0 - 0.5)
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values.dedup();

    if values.len() < 2 {
        values = vec![0.0, 1.0];
    }

    CoordinateList::explicit(values)
}
