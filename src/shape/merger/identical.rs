use super::MergedIndex;
use crate::shape::CoordinateList;

/// The merge of a list with itself.
#[derive(Clone, Debug)]
pub struct IdenticalMerger {
    list: CoordinateList,
}

impl IdenticalMerger {
    /// The merge of `list` with itself.
    pub fn new(list: &CoordinateList) -> Self {
        Self { list: list.clone() }
    }

    /// The shared list.
    pub fn list(&self) -> &CoordinateList {
        &self.list
    }

    /// Merged interval `i` is interval `i` of both inputs.
    #[inline]
    pub fn interval(&self, i: usize) -> MergedIndex {
        let i = i as i32;
        MergedIndex::new(i, i, i)
    }
}
