//! Tri-state result of invoking a deferred computation.

use std::error::Error;

use super::error::Failure;

/// The result of running a [`TryOption`](super::TryOption): a value, an
/// explicit absence, or a captured failure. Exactly one holds.
///
/// Outcomes are built with explicit constructors rather than `From`
/// conversions, so every place that produces a failure is visible.
///
/// # Examples
///
/// ```rust
/// use tryopt::effect::{Failure, Outcome};
///
/// assert_eq!(Outcome::from_option(Some(3)), Outcome::Present(3));
/// assert_eq!(Outcome::<i32>::from_option(None), Outcome::Absent);
///
/// let failed: Outcome<i32> = Outcome::from_failure(Failure::raised("bad input"));
/// assert!(failed.is_failed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A value was produced.
    Present(T),
    /// The computation completed and produced nothing.
    Absent,
    /// An error was raised while producing or transforming the value.
    Failed(Failure),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A present value.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self::Present(value)
    }

    /// `Some` becomes `Present`, `None` becomes `Absent`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// A failed outcome.
    #[inline]
    pub const fn from_failure(failure: Failure) -> Self {
        Self::Failed(failure)
    }

    /// Translates the result of a fallible, optional-producing call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::Outcome;
    ///
    /// let parsed: Result<Option<i32>, std::num::ParseIntError> = "x".parse::<i32>().map(Some);
    /// let outcome = Outcome::from_result(parsed);
    /// assert!(outcome.is_failed());
    /// ```
    pub fn from_result<E>(result: Result<Option<T>, E>) -> Self
    where
        E: Error + 'static,
    {
        match result {
            Ok(option) => Self::from_option(option),
            Err(error) => Self::Failed(Failure::new(error)),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for `Failed`.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrows the contents.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Present(value) => Outcome::Present(value),
            Self::Absent => Outcome::Absent,
            Self::Failed(failure) => Outcome::Failed(failure.clone()),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// The value if present; absence and failure both become `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    /// The failure, if any.
    #[inline]
    pub fn failure(self) -> Option<Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Present(_) | Self::Absent => None,
        }
    }

    /// `Ok(Some(value))`, `Ok(None)` or `Err(failure)`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, Failure> {
        match self {
            Self::Present(value) => Ok(Some(value)),
            Self::Absent => Ok(None),
            Self::Failed(failure) => Err(failure),
        }
    }

    // =========================================================================
    // Transformation and elimination
    // =========================================================================

    /// Transforms a present value. `function` is not protected here; the
    /// deferred combinators wrap it in the boundary before calling this.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Outcome::Present(function(value)),
            Self::Absent => Outcome::Absent,
            Self::Failed(failure) => Outcome::Failed(failure),
        }
    }

    /// Exhaustive three-way elimination.
    #[inline]
    pub fn match_with<R, P, A, F>(self, on_present: P, on_absent: A, on_failed: F) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
        F: FnOnce(Failure) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
            Self::Failed(failure) => on_failed(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Present(1), true, false, false)]
    #[case(Outcome::Absent, false, true, false)]
    #[case(Outcome::Failed(Failure::raised("e")), false, false, true)]
    fn exactly_one_state_holds(
        #[case] outcome: Outcome<i32>,
        #[case] present: bool,
        #[case] absent: bool,
        #[case] failed: bool,
    ) {
        assert_eq!(outcome.is_present(), present);
        assert_eq!(outcome.is_absent(), absent);
        assert_eq!(outcome.is_failed(), failed);
    }

    #[rstest]
    fn from_result_collapses_ok_none_to_absent() {
        let result: Result<Option<i32>, std::fmt::Error> = Ok(None);
        assert_eq!(Outcome::from_result(result), Outcome::Absent);
    }

    #[rstest]
    fn map_keeps_failure_untouched() {
        let outcome: Outcome<i32> = Outcome::from_failure(Failure::raised("first"));
        assert_eq!(
            outcome.map(|x| x + 1).failure(),
            Some(Failure::raised("first"))
        );
    }

    #[rstest]
    fn into_result_distinguishes_absent_from_failed() {
        assert_eq!(Outcome::<i32>::Absent.into_result(), Ok(None));
        assert_eq!(
            Outcome::<i32>::Failed(Failure::raised("e")).into_result(),
            Err(Failure::raised("e"))
        );
    }
}
