//! Functor type class - mapping over a present value.
//!
//! A [`Functor`] applies a function to the value(s) inside a container while
//! keeping its shape. For the two-state optionals in this crate the shape is
//! "present" or "absent": mapping never turns one into the other.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tryopt::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// Types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value, preserving the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference of the inner value.
    ///
    /// Useful when the inner type is not `Clone` and the container must
    /// remain usable afterwards.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Discards the inner value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// UnsafeOptional<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for crate::control::UnsafeOptional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::UnsafeOptional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> crate::control::UnsafeOptional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some("5".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(input.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let x: Option<String> = Some("hello".to_string());
        let y: Option<usize> = x.fmap_ref(|s| s.len());
        assert_eq!(y, Some(5));
        assert_eq!(x, Some("hello".to_string()));
    }

    #[rstest]
    fn option_void() {
        assert_eq!(Some(3).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn unsafe_optional_fmap_keeps_nested_none() {
        use crate::control::UnsafeOptional;

        let nested: UnsafeOptional<Option<i32>> = UnsafeOptional::Some(None);
        let mapped = nested.fmap(|inner| inner.is_none());
        assert_eq!(mapped, UnsafeOptional::Some(true));
    }
}
