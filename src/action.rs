//! Group actions.
use crate::perm::Perm;
use crate::El;

/// Values a permutation can act on.
///
/// Borrowed targets produce an owned result.
pub trait ActionTarget {
    /// Result of acting on a value of this type.
    type Output;
}

impl ActionTarget for El {
    type Output = El;
}

impl<'a> ActionTarget for &'a Perm {
    type Output = Perm;
}

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left. Acting can fail, e.g. when the
/// value lies outside the set the acting element is defined on.
pub trait LeftAction<T: ActionTarget> {
    /// Error returned when the action is not defined for a value.
    type Error;

    /// Act on a value on the left.
    fn left_apply(&self, value: T) -> Result<T::Output, Self::Error>;
}

/// Right action on `T`.
///
/// Elements of implementing types act on `T` values on the right.
pub trait RightAction<T: ActionTarget> {
    /// Error returned when the action is not defined for a value.
    type Error;

    /// Act on a value on the right.
    fn right_apply(&self, value: T) -> Result<T::Output, Self::Error>;
}
