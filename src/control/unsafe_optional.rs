//! Null-permitting optional value.
//!
//! `UnsafeOptional<T>` is a two-state optional whose present arm may hold
//! anything, including an "empty" payload such as `None::<U>` or another
//! `UnsafeOptional`. Nothing is validated or flattened on construction:
//! `UnsafeOptional::Some(None::<i32>)` stays a present value holding an
//! absent one.
//!
//! It is deliberately a separate type from `Option<T>` so that code which
//! relies on "present means usable" cannot be handed a null-carrying value
//! by accident. Conversions between the two are explicit
//! ([`UnsafeOptional::from_option`], [`UnsafeOptional::into_option`]).
//!
//! There is no failure channel here: every combinator sees only
//! present/absent.
//!
//! # Examples
//!
//! ```rust
//! use tryopt::control::UnsafeOptional;
//!
//! let nested: UnsafeOptional<Option<i32>> = UnsafeOptional::some(None);
//! assert!(nested.is_some());
//!
//! let described = nested.match_with(
//!     |inner| format!("present: {inner:?}"),
//!     || "absent".to_string(),
//! );
//! assert_eq!(described, "present: None");
//! ```

/// A two-state optional that permits empty payloads in its present arm.
///
/// # Examples
///
/// ```rust
/// use tryopt::control::UnsafeOptional;
///
/// let value = UnsafeOptional::some(21).map(|n| n * 2);
/// assert_eq!(value, UnsafeOptional::Some(42));
/// assert_eq!(UnsafeOptional::<i32>::none().if_none(7), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsafeOptional<T> {
    /// A present value; may itself be an empty sentinel.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> UnsafeOptional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as present, whatever it is.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts from a validating optional.
    ///
    /// Only the outer layer is translated; an `Option<Option<U>>` becomes an
    /// `UnsafeOptional<Option<U>>` and keeps its inner `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::control::UnsafeOptional;
    ///
    /// let nested: Option<Option<i32>> = Some(None);
    /// assert_eq!(UnsafeOptional::from_option(nested), UnsafeOptional::Some(None));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Some`, even when the payload is itself empty.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> UnsafeOptional<&T> {
        match self {
            Self::Some(value) => UnsafeOptional::Some(value),
            Self::None => UnsafeOptional::None,
        }
    }

    /// Converts into a validating optional, consuming `self`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Iterates over the payload, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms a present payload.
    #[inline]
    pub fn map<R, F>(self, function: F) -> UnsafeOptional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => UnsafeOptional::Some(function(value)),
            Self::None => UnsafeOptional::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::control::UnsafeOptional;
    ///
    /// let lookup = |key: &str| match key {
    ///     "known" => UnsafeOptional::some(1),
    ///     _ => UnsafeOptional::none(),
    /// };
    /// assert_eq!(UnsafeOptional::some("known").bind(lookup), UnsafeOptional::Some(1));
    /// assert_eq!(UnsafeOptional::some("other").bind(lookup), UnsafeOptional::None);
    /// ```
    #[inline]
    pub fn bind<R, F>(self, function: F) -> UnsafeOptional<R>
    where
        F: FnOnce(T) -> UnsafeOptional<R>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => UnsafeOptional::None,
        }
    }

    /// Keeps a present payload only if `predicate` accepts it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Handles both states and returns the branch result.
    ///
    /// Every other elimination method is expressed through this one.
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Runs the side effect for the current state.
    #[inline]
    pub fn match_action<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.match_with(on_some, on_none);
    }

    /// The payload, or `value` when absent.
    #[inline]
    pub fn if_none(self, value: T) -> T {
        self.match_with(|present| present, || value)
    }

    /// The payload, or the result of `function` when absent.
    ///
    /// `function` is only called for `None`.
    #[inline]
    pub fn if_none_with<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|present| present, function)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Folds the payload into `seed`; `seed` is returned untouched when absent.
    #[inline]
    pub fn fold<S, F>(self, seed: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Some(value) => folder(seed, value),
            Self::None => seed,
        }
    }

    /// `true` if present and `predicate` holds.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// `true` if absent, or present and `predicate` holds.
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// `1` when present, `0` when absent.
    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Some(_) => 1,
            Self::None => 0,
        }
    }
}

impl<T> From<UnsafeOptional<T>> for Option<T> {
    #[inline]
    fn from(optional: UnsafeOptional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for UnsafeOptional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
