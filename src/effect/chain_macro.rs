//! `chain!` macro for do-notation over deferred computations.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - bind: continue with the value of a computation
//! - `let pattern = expression;` - pure let binding
//! - `expression` - final computation
//!
//! `<-` is not a valid token sequence in `macro_rules!` patterns, so `<=` is
//! used as the bind arrow.
//!
//! Each bind expands to a `flat_map` call with a `move` closure:
//!
//! ```rust,ignore
//! expression.flat_map(move |pattern| { /* rest */ })
//! ```
//!
//! This works with [`TryOption`](crate::effect::TryOption) through its
//! inherent `flat_map`, and with `Option` or
//! [`UnsafeOptional`](crate::control::UnsafeOptional) when
//! [`Monad`](crate::typeclass::Monad) is in scope.
//!
//! For `TryOption` the closures are `Fn` and may run on every invocation, so a
//! computation captured from outside the macro has to be cloned inside it.

/// Do-notation for monadic chains.
///
/// Absence and failure short-circuit the remaining steps exactly as nested
/// `flat_map` calls would.
///
/// # Examples
///
/// ```rust
/// use tryopt::chain;
/// use tryopt::effect::{Outcome, TryOption};
///
/// let total = chain! {
///     x <= TryOption::some(5);
///     y <= TryOption::some(10);
///     let sum = x + y;
///     TryOption::some(sum * 2)
/// };
/// assert_eq!(total.invoke(), Outcome::Present(30));
///
/// let skipped: TryOption<i32> = chain! {
///     x <= TryOption::some(5);
///     y <= TryOption::<i32>::none();
///     TryOption::some(x + y)
/// };
/// assert_eq!(skipped.invoke(), Outcome::Absent);
/// ```
#[macro_export]
macro_rules! chain {
    // Bind with identifier pattern
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    // Bind discarding the value
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::chain!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::chain!($($rest)+)
        }
    };

    // Final computation
    ($result:expr) => {
        $result
    };
}
