use super::MergedIndex;
use crate::math::Real;
use crate::shape::CoordinateList;

/// The merge of two lists where every value of `lower` is smaller than every value of `upper`.
///
/// The merged list is the concatenation of both. The interval bridging the gap between the
/// two lists belongs to neither.
#[derive(Clone, Debug)]
pub struct NonOverlappingMerger {
    list: CoordinateList,
    lower_len: usize,
    swap: bool,
}

impl NonOverlappingMerger {
    /// Merges `lower` and `upper`.
    ///
    /// If `swap` is `true`, `lower` is the second input of the boolean operation and the
    /// indices reported by [`Self::interval`] are exchanged accordingly.
    pub fn new(lower: &CoordinateList, upper: &CoordinateList, swap: bool) -> Self {
        let values: Vec<Real> = lower.iter().chain(upper.iter()).collect();

        Self {
            list: CoordinateList::explicit(values),
            lower_len: lower.len(),
            swap,
        }
    }

    /// The concatenated list.
    pub fn list(&self) -> &CoordinateList {
        &self.list
    }

    /// The `i`-th merged interval.
    pub fn interval(&self, i: usize) -> MergedIndex {
        let (lower, upper) = if i < self.lower_len {
            (i as i32, -1)
        } else {
            ((self.lower_len - 1) as i32, (i - self.lower_len) as i32)
        };

        if self.swap {
            MergedIndex::new(upper, lower, i as i32)
        } else {
            MergedIndex::new(lower, upper, i as i32)
        }
    }
}
