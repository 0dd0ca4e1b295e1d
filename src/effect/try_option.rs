//! `TryOption` - a deferred computation with three outcomes.
//!
//! A `TryOption<T>` wraps a zero-argument computation that, when invoked,
//! produces a value, produces nothing, or fails. Defining a `TryOption` runs
//! nothing; every [`invoke`](TryOption::invoke) runs the wrapped computation
//! again (there is no memoization).
//!
//! Every combinator invokes its source under the protective boundary and
//! only calls the user function on a present value, again under the
//! boundary. A panic or an `Err` from user code becomes
//! [`Outcome::Failed`]; it never escapes a combinator.
//!
//! # Examples
//!
//! ```rust
//! use tryopt::effect::{Outcome, TryOption};
//!
//! let config_port = TryOption::new(|| std::env::var("TRYOPT_DOC_PORT").ok())
//!     .try_map(|raw| raw.parse::<u16>());
//!
//! // Unset variable: absent, and the parser never runs.
//! assert_eq!(config_port.invoke(), Outcome::Absent);
//!
//! let doubled = TryOption::some(21).map(|x| x * 2);
//! assert_eq!(doubled.invoke(), Outcome::Present(42));
//! ```
//!
//! # Failure vs absence
//!
//! ```rust
//! use tryopt::effect::TryOption;
//!
//! let failing: TryOption<i32> = TryOption::new(|| panic!("disk on fire"));
//! let message = failing.match_with(
//!     |value| format!("ok: {value}"),
//!     || "none".to_string(),
//!     |failure| format!("fail: {}", failure.message()),
//! );
//! assert_eq!(message, "fail: disk on fire");
//! ```

use std::error::Error;
use std::fmt;
use std::rc::Rc;

use super::boundary::{continue_with, guard, protect, raise};
use super::error::Failure;
use super::outcome::Outcome;
use super::tagged::TaggedIter;
use crate::typeclass::Foldable;

/// A deferred computation yielding a value, an absence, or a failure.
///
/// Cloning a `TryOption` shares the wrapped computation; it does not share
/// or cache any result.
///
/// # Type Parameters
///
/// - `T`: The type of the value produced on success.
pub struct TryOption<T> {
    run: Rc<dyn Fn() -> Outcome<T>>,
}

impl<T: 'static> TryOption<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a computation that reports its own outcome.
    ///
    /// This is the most general constructor; the others are built on it.
    pub fn defer<F>(computation: F) -> Self
    where
        F: Fn() -> Outcome<T> + 'static,
    {
        Self {
            run: Rc::new(computation),
        }
    }

    /// Wraps a computation returning an optional value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Outcome, TryOption};
    ///
    /// let computation = TryOption::new(|| Some("value"));
    /// assert_eq!(computation.invoke(), Outcome::Present("value"));
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn() -> Option<T> + 'static,
    {
        Self::defer(move || Outcome::from_option(computation()))
    }

    /// Wraps a fallible computation; `Err` becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::TryOption;
    ///
    /// let parsed = TryOption::attempt(|| "12x".parse::<i32>().map(Some));
    /// assert!(parsed.invoke().is_failed());
    /// ```
    pub fn attempt<E, F>(computation: F) -> Self
    where
        E: Error + 'static,
        F: Fn() -> Result<Option<T>, E> + 'static,
    {
        Self::defer(move || match computation() {
            Ok(option) => Outcome::from_option(option),
            Err(error) => Outcome::Failed(raise(error)),
        })
    }

    /// A computation that always produces `value`.
    pub fn some(value: T) -> Self
    where
        T: Clone,
    {
        Self::defer(move || Outcome::Present(value.clone()))
    }

    /// A computation that always produces nothing.
    pub fn none() -> Self {
        Self::defer(|| Outcome::Absent)
    }

    /// A computation that always fails with `failure`.
    pub fn fail(failure: Failure) -> Self {
        Self::defer(move || Outcome::Failed(failure.clone()))
    }

    /// A computation that always reproduces `option`.
    pub fn from_option(option: Option<T>) -> Self
    where
        T: Clone,
    {
        Self::defer(move || Outcome::from_option(option.clone()))
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Runs the computation under the protective boundary.
    ///
    /// Never panics because of the wrapped computation: a panic inside it is
    /// returned as [`Outcome::Failed`].
    pub fn invoke(&self) -> Outcome<T> {
        protect(|| (self.run)())
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms a present value.
    ///
    /// The source is invoked once per invocation of the result. `mapper` is
    /// not called for absent or failed outcomes; if it panics the result is
    /// failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Outcome, TryOption};
    ///
    /// assert_eq!(TryOption::some(5).map(|x| x * 2).invoke(), Outcome::Present(10));
    /// assert_eq!(TryOption::<i32>::none().map(|x| x * 2).invoke(), Outcome::Absent);
    /// ```
    pub fn map<R, F>(self, mapper: F) -> TryOption<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        TryOption::defer(move || {
            continue_with(self.invoke(), |value| Outcome::Present(mapper(value)))
        })
    }

    /// Transforms a present value with a fallible function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::TryOption;
    ///
    /// let parsed = TryOption::some("7").try_map(str::parse::<i32>);
    /// assert_eq!(parsed.to_option(), Some(7));
    ///
    /// let broken = TryOption::some("seven").try_map(str::parse::<i32>);
    /// assert!(broken.invoke().is_failed());
    /// ```
    pub fn try_map<R, E, F>(self, mapper: F) -> TryOption<R>
    where
        R: 'static,
        E: Error + 'static,
        F: Fn(T) -> Result<R, E> + 'static,
    {
        TryOption::defer(move || {
            continue_with(self.invoke(), |value| match mapper(value) {
                Ok(mapped) => Outcome::Present(mapped),
                Err(error) => Outcome::Failed(raise(error)),
            })
        })
    }

    /// Keeps a present value only if `predicate` accepts it.
    ///
    /// A rejected value becomes absent; a panicking predicate becomes a
    /// failure.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::defer(move || {
            continue_with(self.invoke(), |value| {
                if predicate(&value) {
                    Outcome::Present(value)
                } else {
                    Outcome::Absent
                }
            })
        })
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Chains a dependent computation.
    ///
    /// On a present value, `binder` builds the next computation, which is
    /// then invoked under the boundary. Absent and failed outcomes
    /// short-circuit without calling `binder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Outcome, TryOption};
    ///
    /// let next = TryOption::some(1).bind(|x| TryOption::some(x + 1));
    /// assert_eq!(next.invoke(), Outcome::Present(2));
    ///
    /// let skipped = TryOption::<i32>::none().bind(|x| TryOption::some(x + 1));
    /// assert_eq!(skipped.invoke(), Outcome::Absent);
    /// ```
    pub fn bind<R, F>(self, binder: F) -> TryOption<R>
    where
        R: 'static,
        F: Fn(T) -> TryOption<R> + 'static,
    {
        TryOption::defer(move || continue_with(self.invoke(), |value| binder(value).invoke()))
    }

    /// Alias for [`TryOption::bind`].
    #[inline]
    pub fn flat_map<R, F>(self, binder: F) -> TryOption<R>
    where
        R: 'static,
        F: Fn(T) -> TryOption<R> + 'static,
    {
        self.bind(binder)
    }

    /// Alias for [`TryOption::bind`].
    #[inline]
    pub fn and_then<R, F>(self, binder: F) -> TryOption<R>
    where
        R: 'static,
        F: Fn(T) -> TryOption<R> + 'static,
    {
        self.bind(binder)
    }

    /// Chains a dependent computation and combines both values.
    ///
    /// Each stage short-circuits; the first failure is the one reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Outcome, TryOption};
    ///
    /// let total = TryOption::some(2).select_many(|x| TryOption::some(x * 10), |x, y| x + y);
    /// assert_eq!(total.invoke(), Outcome::Present(22));
    /// ```
    pub fn select_many<U, R, B, P>(self, binder: B, projector: P) -> TryOption<R>
    where
        T: Clone,
        U: 'static,
        R: 'static,
        B: Fn(T) -> TryOption<U> + 'static,
        P: Fn(T, U) -> R + 'static,
    {
        TryOption::defer(move || {
            continue_with(self.invoke(), |first| {
                let second = binder(first.clone()).invoke();
                continue_with(second, |second| Outcome::Present(projector(first, second)))
            })
        })
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Invokes the computation and handles all three outcomes.
    ///
    /// The branch handlers run outside the boundary: a panic inside one of
    /// them propagates to the caller.
    pub fn match_with<R, P, A, F>(&self, on_present: P, on_absent: A, on_failed: F) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
        F: FnOnce(Failure) -> R,
    {
        self.invoke().match_with(on_present, on_absent, on_failed)
    }

    /// Invokes the computation and runs the side effect for its outcome.
    pub fn match_action<P, A, F>(&self, on_present: P, on_absent: A, on_failed: F)
    where
        P: FnOnce(T),
        A: FnOnce(),
        F: FnOnce(Failure),
    {
        self.match_with(on_present, on_absent, on_failed);
    }

    /// [`TryOption::match_with`] with constant absent and failed branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Failure, TryOption};
    ///
    /// let failed = TryOption::<i32>::fail(Failure::raised("bad"));
    /// assert_eq!(failed.match_or(|x| x, 0, -1), -1);
    /// assert_eq!(TryOption::<i32>::none().match_or(|x| x, 0, -1), 0);
    /// ```
    pub fn match_or<R, P>(&self, on_present: P, absent: R, failed: R) -> R
    where
        P: FnOnce(T) -> R,
    {
        self.match_with(on_present, || absent, |_| failed)
    }

    /// [`TryOption::match_with`] with absence and failure handled alike.
    pub fn match_present_or<R, P, O>(&self, on_present: P, on_other: O) -> R
    where
        P: FnOnce(T) -> R,
        O: FnOnce() -> R,
    {
        self.invoke().into_option().map_or_else(on_other, on_present)
    }

    /// The value, or `default` when absent or failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Failure, TryOption};
    ///
    /// assert_eq!(TryOption::<i32>::fail(Failure::raised("x")).recover_value(99), 99);
    /// assert_eq!(TryOption::some(7).recover_value(99), 7);
    /// ```
    pub fn recover_value(&self, default: T) -> T {
        self.invoke().into_option().unwrap_or(default)
    }

    /// The value, or the result of `default` when absent or failed.
    ///
    /// `default` is only called when there is no value.
    pub fn recover_compute<F>(&self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.invoke().into_option().unwrap_or_else(default)
    }

    /// Replaces a failure with the outcome of `handler`.
    ///
    /// Present and absent outcomes pass through; `handler` is only called
    /// with a failure, under the boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Failure, Outcome, TryOption};
    ///
    /// let recovered = TryOption::<i32>::fail(Failure::raised("x")).recover_with(|_| Some(0));
    /// assert_eq!(recovered.invoke(), Outcome::Present(0));
    ///
    /// let still_absent = TryOption::<i32>::none().recover_with(|_| Some(0));
    /// assert_eq!(still_absent.invoke(), Outcome::Absent);
    /// ```
    #[must_use]
    pub fn recover_with<F>(self, handler: F) -> Self
    where
        F: Fn(Failure) -> Option<T> + 'static,
    {
        Self::defer(move || match self.invoke() {
            Outcome::Failed(failure) => protect(|| Outcome::from_option(handler(failure))),
            other => other,
        })
    }

    /// The value when present, `on_failed(failure)` when failed, and `None`
    /// when absent.
    pub fn if_fail<F>(&self, on_failed: F) -> Option<T>
    where
        F: FnOnce(Failure) -> T,
    {
        self.match_with(Some, || None, |failure| Some(on_failed(failure)))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `1` if the computation produces a value, `0` otherwise.
    pub fn count(&self) -> usize {
        self.invoke().into_option().length()
    }

    /// `true` if the computation produces a value accepted by `predicate`.
    ///
    /// Absent, failed, and a panicking predicate all give `false`.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.invoke()
            .into_option()
            .exists(|value| guard(|| predicate(value)).unwrap_or(false))
    }

    /// `true` only if the computation produces a value accepted by
    /// `predicate`.
    ///
    /// Unlike a universal quantifier over an empty set, this is `false` when
    /// the outcome is absent or failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::TryOption;
    ///
    /// assert!(TryOption::some(4).for_all(|x| x % 2 == 0));
    /// assert!(!TryOption::<i32>::none().for_all(|x| x % 2 == 0));
    /// ```
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.invoke().into_option() {
            Some(value) => guard(|| predicate(&value)).unwrap_or(false),
            None => false,
        }
    }

    /// Folds the value into `seed`.
    ///
    /// Returns `seed` unchanged when absent, failed, or when `folder` panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::TryOption;
    ///
    /// assert_eq!(TryOption::some(5).fold(10, |state, x| state + x), 15);
    /// assert_eq!(TryOption::<i32>::none().fold(10, |state, x| state + x), 10);
    /// ```
    pub fn fold<S, F>(&self, seed: S, mut folder: F) -> S
    where
        S: Clone,
        F: FnMut(S, T) -> S,
    {
        self.invoke().into_option().fold_left(seed, |state, value| {
            let fallback = state.clone();
            guard(|| folder(state, value)).unwrap_or(fallback)
        })
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// A lazy sequence of at most one error-tagged item.
    ///
    /// The computation runs on the first call to `next`. `Ok(value)` is
    /// yielded for a present value, `Err(failure)` for a failure, and nothing
    /// for an absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryopt::effect::{Failure, TryOption};
    ///
    /// let items: Vec<_> = TryOption::some(3).iter().collect();
    /// assert_eq!(items, vec![Ok(3)]);
    ///
    /// let items: Vec<_> = TryOption::<i32>::fail(Failure::raised("e")).iter().collect();
    /// assert_eq!(items, vec![Err(Failure::raised("e"))]);
    ///
    /// assert_eq!(TryOption::<i32>::none().iter().count(), 0);
    /// ```
    pub fn iter(&self) -> TaggedIter<T> {
        TaggedIter::new(self.clone())
    }

    /// Invokes and keeps only a present value.
    pub fn to_option(&self) -> Option<T> {
        self.invoke().into_option()
    }

    /// Invokes and reports the outcome as `Result<Option<T>, Failure>`.
    pub fn to_result(&self) -> Result<Option<T>, Failure> {
        self.invoke().into_result()
    }
}

impl<T> Clone for TryOption<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for TryOption<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TryOption(<deferred>)")
    }
}

impl<T: 'static> IntoIterator for TryOption<T> {
    type Item = Result<T, Failure>;
    type IntoIter = TaggedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        TaggedIter::new(self)
    }
}
