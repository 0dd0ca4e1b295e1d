//! Foldable type class - reducing a structure to a summary value.
//!
//! For two-state optionals a fold visits zero or one element, which is all the
//! query family of [`TryOption`](crate::effect::TryOption) needs: counting,
//! existence checks and seeded folds over whatever a computation produced.
//!
//! # Examples
//!
//! ```rust
//! use tryopt::typeclass::Foldable;
//!
//! assert_eq!(Some(10).fold_left(5, |accumulator, element| accumulator + element), 15);
//! assert_eq!(None::<i32>.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;

/// Data structures that can be folded into a summary value.
///
/// Only `fold_left` and `fold_right` are required; everything else is
/// derived from `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::typeclass::Foldable;
    ///
    /// assert_eq!(Some("x").length(), 1);
    /// assert_eq!(None::<&str>.length(), 0);
    /// ```
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` when there is nothing to fold.
    fn is_empty(self) -> bool
    where
        Self: Sized,
    {
        self.fold_left(true, |_, _| false)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// First element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Whether any element satisfies `predicate`. `false` when empty.
    fn exists<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.find(predicate).is_some()
    }

    /// Whether every element satisfies `predicate`. `true` when empty.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn is_empty(self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// UnsafeOptional<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Foldable for crate::control::UnsafeOptional<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_option().fold_left(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_option().fold_right(init, function)
    }

    #[inline]
    fn length(self) -> usize {
        usize::from(self.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), 1)]
    #[case(None, 0)]
    fn option_length(#[case] input: Option<i32>, #[case] expected: usize) {
        assert_eq!(input.length(), expected);
    }

    #[rstest]
    fn option_fold_right_matches_fold_left() {
        let left = Some(4).fold_left(1, |accumulator, element| accumulator * element);
        let right = Some(4).fold_right(1, |element, accumulator| accumulator * element);
        assert_eq!(left, right);
    }

    #[rstest]
    #[case(Some(4), true, true)]
    #[case(Some(3), false, false)]
    #[case(None, false, true)]
    fn option_exists_and_for_all(
        #[case] input: Option<i32>,
        #[case] exists: bool,
        #[case] for_all: bool,
    ) {
        assert_eq!(input.exists(|n| n % 2 == 0), exists);
        assert_eq!(input.for_all(|n| n % 2 == 0), for_all);
    }

    #[rstest]
    fn option_to_list_and_find() {
        assert_eq!(Some("a").to_list(), vec!["a"]);
        assert!(None::<&str>.to_list().is_empty());
        assert_eq!(Some(9).find(|n| *n > 5), Some(9));
        assert_eq!(Some(1).find(|n| *n > 5), None);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn unsafe_optional_fold_left() {
        use crate::control::UnsafeOptional;

        assert_eq!(UnsafeOptional::Some(2).fold_left(10, |a, b| a + b), 12);
        assert_eq!(UnsafeOptional::<i32>::None.fold_left(10, |a, b| a + b), 10);
    }
}
