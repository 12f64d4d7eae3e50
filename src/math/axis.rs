/// One of the three coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The `x` axis.
    X = 0,
    /// The `y` axis.
    Y = 1,
    /// The `z` axis.
    Z = 2,
}

impl Axis {
    /// All the axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The index of this axis, usable to index a `Point` or a `Vector`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Picks the argument matching this axis.
    #[inline]
    pub fn choose<T>(self, x: T, y: T, z: T) -> T {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }
}

/// A cyclic permutation of the three coordinate axes.
///
/// Sweep algorithms are written once for a canonical axis frame; cycling the frame
/// applies them along the other two axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisCycle {
    /// The identity permutation.
    None,
    /// Maps `X -> Y -> Z -> X`.
    Forward,
    /// Maps `X -> Z -> Y -> X`.
    Backward,
}

impl AxisCycle {
    /// All the cycles, ordered by shift amount.
    pub const ALL: [AxisCycle; 3] = [AxisCycle::None, AxisCycle::Forward, AxisCycle::Backward];

    /// The axis `axis` is sent to by this cycle.
    #[inline]
    pub fn cycle_axis(self, axis: Axis) -> Axis {
        match self {
            AxisCycle::None => axis,
            AxisCycle::Forward => Axis::ALL[(axis.index() + 1) % 3],
            AxisCycle::Backward => Axis::ALL[(axis.index() + 2) % 3],
        }
    }

    /// The `axis` component of the triple `(x, y, z)` expressed in the cycled frame.
    #[inline]
    pub fn cycle<T>(self, x: T, y: T, z: T, axis: Axis) -> T {
        match self {
            AxisCycle::None => axis.choose(x, y, z),
            AxisCycle::Forward => axis.choose(z, x, y),
            AxisCycle::Backward => axis.choose(y, z, x),
        }
    }

    /// The cycle undoing this one.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            AxisCycle::None => AxisCycle::None,
            AxisCycle::Forward => AxisCycle::Backward,
            AxisCycle::Backward => AxisCycle::Forward,
        }
    }

    /// The cycle sending `from` to `to`.
    #[inline]
    pub fn between(from: Axis, to: Axis) -> Self {
        Self::ALL[(to.index() + 3 - from.index()) % 3]
    }
}
