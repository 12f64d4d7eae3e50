use super::MergedIndex;
use crate::shape::CoordinateList;
use crate::utils;

/// Merges two uniform subdivisions of `[0, 1]` into the subdivision with `lcm(a, b)` parts.
#[derive(Clone, Debug)]
pub struct DiscreteCubeMerger {
    list: CoordinateList,
    first_div: i32,
    second_div: i32,
}

impl DiscreteCubeMerger {
    /// Merges a subdivision in `a` parts with a subdivision in `b` parts.
    ///
    // NOTE: `a` and `b` must be non-zero and `lcm(a, b)` must fit in a `u32`.
    pub(crate) fn new(a: u32, b: u32) -> Self {
        let gcd = utils::gcd(a, b);
        let parts = utils::lcm(a, b) as u32;

        Self {
            list: CoordinateList::Uniform(parts),
            first_div: (a / gcd) as i32,
            second_div: (b / gcd) as i32,
        }
    }

    /// The merged uniform list.
    pub fn list(&self) -> &CoordinateList {
        &self.list
    }

    /// Merged cell `i` lies in cell `i / (lcm / a)` of the first list.
    #[inline]
    pub fn interval(&self, i: usize) -> MergedIndex {
        let i = i as i32;
        MergedIndex::new(i / self.second_div, i / self.first_div, i)
    }
}
