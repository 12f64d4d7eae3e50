use crate::math::Real;
use crate::shape::ShapeError;
use std::sync::Arc;

/// An ordered sequence of split-plane positions along one axis.
///
/// A list of `n + 1` coordinates delimits the `n` cells of a discrete grid along that axis.
/// Values are strictly increasing. Lists are immutable and cheap to clone: explicit values
/// are shared, and translations wrap the original list instead of copying it.
#[derive(Clone, Debug)]
pub enum CoordinateList {
    /// `parts` equal subdivisions of `[0, 1]`: the value at index `i` is `i / parts`.
    Uniform(u32),
    /// An arbitrary increasing list of values.
    Explicit(Arc<[Real]>),
    /// A list whose values are shifted by `offset` at read time.
    ///
    /// The base list is never itself an `Offset`.
    Offset {
        /// The untranslated list.
        base: Arc<CoordinateList>,
        /// The translation applied to every value of `base`.
        offset: Real,
    },
}

impl CoordinateList {
    /// The coordinates of `parts` equal subdivisions of `[0, 1]`.
    pub fn uniform(parts: u32) -> Result<Self, ShapeError> {
        if parts == 0 {
            Err(ShapeError::InvalidSubdivision)
        } else {
            Ok(CoordinateList::Uniform(parts))
        }
    }

    /// A list made of the given increasing values.
    pub fn explicit(values: impl Into<Arc<[Real]>>) -> Self {
        CoordinateList::Explicit(values.into())
    }

    /// This list, with all its values shifted by `offset`.
    ///
    /// This does not copy the underlying values.
    pub fn offset(&self, offset: Real) -> Self {
        match self {
            CoordinateList::Offset { base, offset: curr } => CoordinateList::Offset {
                base: base.clone(),
                offset: curr + offset,
            },
            _ => CoordinateList::Offset {
                base: Arc::new(self.clone()),
                offset,
            },
        }
    }

    /// The number of coordinates in this list.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            CoordinateList::Uniform(parts) => *parts as usize + 1,
            CoordinateList::Explicit(values) => values.len(),
            CoordinateList::Offset { base, .. } => base.len(),
        }
    }

    /// Is this list empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th coordinate.
    ///
    /// Panics if `i >= self.len()` on explicit lists.
    #[inline]
    pub fn value_at(&self, i: usize) -> Real {
        match self {
            CoordinateList::Uniform(parts) => i as Real / *parts as Real,
            CoordinateList::Explicit(values) => values[i],
            CoordinateList::Offset { base, offset } => base.value_at(i) + offset,
        }
    }

    /// The smallest coordinate.
    #[inline]
    pub fn first(&self) -> Real {
        self.value_at(0)
    }

    /// The largest coordinate.
    #[inline]
    pub fn last(&self) -> Real {
        self.value_at(self.len() - 1)
    }

    /// The number of parts if this is an untranslated uniform subdivision of `[0, 1]`.
    #[inline]
    pub fn uniform_parts(&self) -> Option<u32> {
        match self {
            CoordinateList::Uniform(parts) => Some(*parts),
            _ => None,
        }
    }

    /// Iterates through the coordinates in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Real> + '_ {
        (0..self.len()).map(move |i| self.value_at(i))
    }

    /// Do both lists hold exactly the same values?
    pub fn same_values(&self, other: &CoordinateList) -> bool {
        match (self, other) {
            (CoordinateList::Uniform(a), CoordinateList::Uniform(b)) => a == b,
            (CoordinateList::Explicit(a), CoordinateList::Explicit(b)) if Arc::ptr_eq(a, b) => {
                true
            }
            _ => self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}
