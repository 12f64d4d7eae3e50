//! Merging of two coordinate lists into a common subdivision.
//!
//! Boolean operations between voxel shapes with different subdivisions work on the union of
//! their split planes. An [`IndexMerger`] computes that union along one axis and maps each
//! merged interval back to the intervals of both inputs it overlaps.

pub use self::discrete_cube::DiscreteCubeMerger;
pub use self::identical::IdenticalMerger;
pub use self::indirect::IndirectMerger;
pub use self::non_overlapping::NonOverlappingMerger;

use crate::math::EPSILON;
use crate::shape::CoordinateList;
use crate::utils;

mod discrete_cube;
mod identical;
mod indirect;
mod non_overlapping;

/// The largest number of cells a uniform merged grid may have before falling back to an
/// explicit coordinate list.
pub const MAX_DISCRETE_CUBE_CELLS: u64 = 256;

/// One interval of a merged coordinate list.
///
/// `first` and `second` are the indices of the intervals of each input list overlapping
/// this merged interval, or an out-of-range index (e.g. `-1`) if that input doesn't cover it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MergedIndex {
    /// The interval index in the first list.
    pub first: i32,
    /// The interval index in the second list.
    pub second: i32,
    /// The interval index in the merged list.
    pub merged: i32,
}

impl MergedIndex {
    #[inline]
    pub(crate) fn new(first: i32, second: i32, merged: i32) -> Self {
        Self {
            first,
            second,
            merged,
        }
    }
}

/// The merge of two coordinate lists along one axis.
#[derive(Clone, Debug)]
pub enum IndexMerger {
    /// Both lists are uniform subdivisions of `[0, 1]`: the merge is their least common multiple.
    DiscreteCube(DiscreteCubeMerger),
    /// Every value of one list lies strictly before every value of the other.
    NonOverlapping(NonOverlappingMerger),
    /// Both lists hold the same values.
    Identical(IdenticalMerger),
    /// The general case: a sorted merge of both lists.
    Indirect(IndirectMerger),
}

impl IndexMerger {
    /// Selects and builds the cheapest merger for `first` and `second`.
    ///
    /// The `cell_budget` is the number of merged cells already produced on the previous axes:
    /// the uniform fast path is taken only if `cell_budget * lcm(parts)` stays small.
    /// `include_first_only` and `include_second_only` tell whether intervals covered by only
    /// one of the lists must be kept; the general merger skips them otherwise.
    pub fn new(
        cell_budget: usize,
        first: &CoordinateList,
        second: &CoordinateList,
        include_first_only: bool,
        include_second_only: bool,
    ) -> Self {
        if let (Some(a), Some(b)) = (first.uniform_parts(), second.uniform_parts()) {
            let parts = utils::lcm(a, b);

            if parts != 0 && (cell_budget as u64).saturating_mul(parts) <= MAX_DISCRETE_CUBE_CELLS
            {
                return IndexMerger::DiscreteCube(DiscreteCubeMerger::new(a, b));
            }

            log::trace!(
                "Uniform lists with {a} and {b} parts exceed the discrete merge budget ({cell_budget} cells)."
            );
        }

        if first.last() < second.first() - EPSILON {
            IndexMerger::NonOverlapping(NonOverlappingMerger::new(first, second, false))
        } else if second.last() < first.first() - EPSILON {
            IndexMerger::NonOverlapping(NonOverlappingMerger::new(second, first, true))
        } else if first.len() == second.len() && first.same_values(second) {
            IndexMerger::Identical(IdenticalMerger::new(first))
        } else {
            IndexMerger::Indirect(IndirectMerger::new(
                first,
                second,
                include_first_only,
                include_second_only,
            ))
        }
    }

    /// The merged coordinate list.
    pub fn list(&self) -> &CoordinateList {
        match self {
            IndexMerger::DiscreteCube(m) => m.list(),
            IndexMerger::NonOverlapping(m) => m.list(),
            IndexMerger::Identical(m) => m.list(),
            IndexMerger::Indirect(m) => m.list(),
        }
    }

    /// The number of coordinates of the merged list.
    ///
    /// The merged list delimits `self.len() - 1` intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Is the merged list empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is this the uniform fast path?
    #[inline]
    pub fn is_discrete_cube(&self) -> bool {
        matches!(self, IndexMerger::DiscreteCube(_))
    }

    /// The `i`-th merged interval.
    ///
    /// `i` must be smaller than `self.len() - 1`.
    pub fn interval(&self, i: usize) -> MergedIndex {
        match self {
            IndexMerger::DiscreteCube(m) => m.interval(i),
            IndexMerger::NonOverlapping(m) => m.interval(i),
            IndexMerger::Identical(m) => m.interval(i),
            IndexMerger::Indirect(m) => m.interval(i),
        }
    }

    /// Iterates through all the merged intervals in increasing order.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = MergedIndex> + '_ {
        (0..self.len().saturating_sub(1)).map(move |i| self.interval(i))
    }

    /// Calls `f` on each merged interval until it returns `false`.
    ///
    /// Returns `true` if every call returned `true`.
    pub fn for_merged_indexes(&self, mut f: impl FnMut(i32, i32, i32) -> bool) -> bool {
        self.intervals().all(|m| f(m.first, m.second, m.merged))
    }
}
