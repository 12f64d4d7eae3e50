use super::{Axis, Real, Vector};

/// The sign of a direction along a coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AxisDirection {
    /// Towards increasing coordinates.
    Positive,
    /// Towards decreasing coordinates.
    Negative,
}

impl AxisDirection {
    /// `1` for [`AxisDirection::Positive`], `-1` otherwise.
    #[inline]
    pub const fn step(self) -> i32 {
        match self {
            AxisDirection::Positive => 1,
            AxisDirection::Negative => -1,
        }
    }

    /// The opposite sign.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            AxisDirection::Positive => AxisDirection::Negative,
            AxisDirection::Negative => AxisDirection::Positive,
        }
    }
}

/// One of the six faces of a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Direction {
    /// The `-y` direction.
    Down = 0,
    /// The `+y` direction.
    Up = 1,
    /// The `-z` direction.
    North = 2,
    /// The `+z` direction.
    South = 3,
    /// The `-x` direction.
    West = 4,
    /// The `+x` direction.
    East = 5,
}

impl Direction {
    /// All the directions, in index order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The index of this direction, in `0..6`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis this direction is parallel to.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// The sign of this direction along its axis.
    #[inline]
    pub const fn axis_direction(self) -> AxisDirection {
        match self {
            Direction::Up | Direction::South | Direction::East => AxisDirection::Positive,
            Direction::Down | Direction::North | Direction::West => AxisDirection::Negative,
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The direction along `axis` with the sign `direction`.
    #[inline]
    pub const fn from_axis_and_direction(axis: Axis, direction: AxisDirection) -> Self {
        match (axis, direction) {
            (Axis::X, AxisDirection::Positive) => Direction::East,
            (Axis::X, AxisDirection::Negative) => Direction::West,
            (Axis::Y, AxisDirection::Positive) => Direction::Up,
            (Axis::Y, AxisDirection::Negative) => Direction::Down,
            (Axis::Z, AxisDirection::Positive) => Direction::South,
            (Axis::Z, AxisDirection::Negative) => Direction::North,
        }
    }

    /// The unit outward normal of this direction.
    #[inline]
    pub fn normal(self) -> Vector<Real> {
        let mut normal = Vector::zeros();
        normal[self.axis().index()] = self.axis_direction().step() as Real;
        normal
    }

    /// The direction whose normal is the most aligned with `(dx, dy, dz)`.
    ///
    /// Ties are resolved in favor of the direction appearing first in [`Direction::ALL`].
    /// Returns [`Direction::North`] if no direction points towards the vector.
    pub fn nearest(dx: Real, dy: Real, dz: Real) -> Self {
        let dir = Vector::new(dx, dy, dz);
        let mut best = Direction::North;
        let mut best_dot = 0.0;

        for candidate in Self::ALL {
            let dot = candidate.normal().dot(&dir);
            if dot > best_dot {
                best_dot = dot;
                best = candidate;
            }
        }

        best
    }

    /// The single-bit [`AxisMask`] identifying this direction.
    #[inline]
    pub const fn axis_mask(self) -> AxisMask {
        match self {
            Direction::Down => AxisMask::Y_NEG,
            Direction::Up => AxisMask::Y_POS,
            Direction::North => AxisMask::Z_NEG,
            Direction::South => AxisMask::Z_POS,
            Direction::West => AxisMask::X_NEG,
            Direction::East => AxisMask::X_POS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A set of signed directions along coordinate axes, or faces of a cell.
pub struct AxisMask(u8);

bitflags::bitflags! {
    /// Flags for identifying signed directions along coordinate axes, or faces of a cell.
    impl AxisMask: u8 {
        /// The direction or face along the `+x` coordinate axis.
        const X_POS = 1 << 0;
        /// The direction or face along the `-x` coordinate axis.
        const X_NEG = 1 << 1;
        /// The direction or face along the `+y` coordinate axis.
        const Y_POS = 1 << 2;
        /// The direction or face along the `-y` coordinate axis.
        const Y_NEG = 1 << 3;
        /// The direction or face along the `+z` coordinate axis.
        const Z_POS = 1 << 4;
        /// The direction or face along the `-z` coordinate axis.
        const Z_NEG = 1 << 5;
    }
}
