use super::MergedIndex;
use crate::math::{Real, EPSILON};
use crate::shape::CoordinateList;

/// The general merge: a sorted union of two lists, with values closer than
/// [`EPSILON`](crate::math::EPSILON) collapsed into one.
#[derive(Clone, Debug)]
pub struct IndirectMerger {
    list: CoordinateList,
    first_indices: Vec<i32>,
    second_indices: Vec<i32>,
}

impl IndirectMerger {
    /// Merges `first` with `second`.
    ///
    /// Unless `include_first_only` is set, the values of `first` lying before the start or
    /// after the end of `second` are dropped; likewise for `include_second_only`.
    pub fn new(
        first: &CoordinateList,
        second: &CoordinateList,
        include_first_only: bool,
        include_second_only: bool,
    ) -> Self {
        let capacity = first.len() + second.len();
        let mut values: Vec<Real> = Vec::with_capacity(capacity);
        let mut first_indices = Vec::with_capacity(capacity);
        let mut second_indices = Vec::with_capacity(capacity);

        let mut last = Real::NAN;
        let mut i = 0;
        let mut j = 0;

        loop {
            let first_done = i >= first.len();
            let second_done = j >= second.len();

            if first_done && second_done {
                break;
            }

            let take_first =
                !first_done && (second_done || first.value_at(i) < second.value_at(j) + EPSILON);

            if take_first {
                i += 1;
                if !include_first_only && (j == 0 || second_done) {
                    continue;
                }
            } else {
                j += 1;
                if !include_second_only && (i == 0 || first_done) {
                    continue;
                }
            }

            let first_id = i as i32 - 1;
            let second_id = j as i32 - 1;
            let value = if take_first {
                first.value_at(i - 1)
            } else {
                second.value_at(j - 1)
            };

            if last.is_nan() || last < value - EPSILON {
                values.push(value);
                first_indices.push(first_id);
                second_indices.push(second_id);
                last = value;
            } else if let (Some(f), Some(s)) = (first_indices.last_mut(), second_indices.last_mut())
            {
                *f = first_id;
                *s = second_id;
            }
        }

        if values.is_empty() {
            values.push(first.last().min(second.last()));
            first_indices.push(0);
            second_indices.push(0);
        }

        Self {
            list: CoordinateList::explicit(values),
            first_indices,
            second_indices,
        }
    }

    /// The merged values.
    pub fn list(&self) -> &CoordinateList {
        &self.list
    }

    /// The `i`-th merged interval.
    #[inline]
    pub fn interval(&self, i: usize) -> MergedIndex {
        MergedIndex::new(self.first_indices[i], self.second_indices[i], i as i32)
    }
}
