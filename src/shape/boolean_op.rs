/// A boolean function of two occupancy flags, used to combine two shapes cell by cell.
///
/// The first argument is the occupancy of the first shape, the second argument the
/// occupancy of the second shape. The variants enumerate all 16 truth tables; only those
/// mapping `(false, false)` to `false` can be used to join shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BooleanOp {
    /// Always `false`.
    False,
    /// `!(a || b)`.
    NotOr,
    /// `b && !a`.
    OnlySecond,
    /// `!a`.
    NotFirst,
    /// `a && !b`: the set difference `first - second`.
    OnlyFirst,
    /// `!b`.
    NotSecond,
    /// `a != b`: the symmetric difference.
    NotSame,
    /// `!(a && b)`.
    NotAnd,
    /// `a && b`: the intersection.
    And,
    /// `a == b`.
    Same,
    /// `b`.
    Second,
    /// `!a || b`.
    Causes,
    /// `a`.
    First,
    /// `a || !b`.
    CausedBy,
    /// `a || b`: the union.
    Or,
    /// Always `true`.
    True,
}

impl BooleanOp {
    /// The exclusive or, alias of [`BooleanOp::NotSame`].
    pub const XOR: BooleanOp = BooleanOp::NotSame;

    /// Evaluates this operator.
    #[inline]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BooleanOp::False => false,
            BooleanOp::NotOr => !a && !b,
            BooleanOp::OnlySecond => b && !a,
            BooleanOp::NotFirst => !a,
            BooleanOp::OnlyFirst => a && !b,
            BooleanOp::NotSecond => !b,
            BooleanOp::NotSame => a != b,
            BooleanOp::NotAnd => !a || !b,
            BooleanOp::And => a && b,
            BooleanOp::Same => a == b,
            BooleanOp::Second => b,
            BooleanOp::Causes => !a || b,
            BooleanOp::First => a,
            BooleanOp::CausedBy => a || !b,
            BooleanOp::Or => a || b,
            BooleanOp::True => true,
        }
    }

    /// Can this operator be used to combine shapes?
    ///
    /// An operator producing a full cell out of two empty cells would turn the
    /// infinite outside of both shapes into a full region.
    #[inline]
    pub fn is_meaningful(self) -> bool {
        !self.apply(false, false)
    }
}
