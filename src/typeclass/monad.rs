//! Monad type class - sequencing dependent computations.
//!
//! [`Monad`] adds `flat_map` to [`Functor`]: the value produced by one step
//! decides which container the next step returns. For two-state optionals an
//! absent value short-circuits the rest of the chain.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f)             == f(a)
//! m.flat_map(pure)                == m
//! m.flat_map(f).flat_map(g)       == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tryopt::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::functor::Functor;

/// Types that support sequencing with `flat_map`.
pub trait Monad: Functor {
    /// Lifts a value into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Feeds the inner value to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the inner value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// UnsafeOptional<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for crate::control::UnsafeOptional<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::UnsafeOptional<B>
    where
        F: FnOnce(A) -> crate::control::UnsafeOptional<B>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(n: i32) -> Option<i32> {
        if n % 2 == 0 { Some(n / 2) } else { None }
    }

    #[rstest]
    #[case(8, Some(2))]
    #[case(6, None)]
    fn option_flat_map_chain(#[case] input: i32, #[case] expected: Option<i32>) {
        assert_eq!(Some(input).flat_map(half).flat_map(half), expected);
    }

    #[rstest]
    fn option_left_identity() {
        assert_eq!(<Option<i32> as Monad>::pure(4).flat_map(half), half(4));
    }

    #[rstest]
    fn option_then_short_circuits() {
        assert_eq!(None::<i32>.then(Some("next")), None);
        assert_eq!(Some(1).then(Some("next")), Some("next"));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn unsafe_optional_right_identity() {
        use crate::control::UnsafeOptional;

        let value: UnsafeOptional<Option<i32>> = UnsafeOptional::Some(None);
        assert_eq!(value.flat_map(UnsafeOptional::pure), value);
    }
}
