//! Deferred tri-state computations.
//!
//! - [`TryOption`]: a deferred computation that yields a value, an absence,
//!   or a captured failure each time it is invoked
//! - [`Outcome`]: the result of one invocation
//! - [`Failure`], [`FailureKind`]: what a failed outcome carries
//! - [`protect`]: the boundary that turns panics into failed outcomes
//! - [`TaggedIter`]: a `TryOption` viewed as a sequence of `Result`s
//! - [`chain!`](crate::chain): do-notation over `flat_map`
//!
//! # Absence is not failure
//!
//! Combinators keep the three states apart. Queries (`count`, `exists`,
//! `for_all`, `fold`) treat absence and failure alike as "no contribution";
//! the match family, `recover_with`, `if_fail`, `to_result` and the tagged
//! sequence tell them apart.
//!
//! # Examples
//!
//! ```rust
//! use tryopt::effect::{Outcome, TryOption};
//!
//! let lookup = TryOption::new(|| Some(3))
//!     .map(|x| x * 2)
//!     .bind(|x| if x > 5 { TryOption::some(x) } else { TryOption::none() });
//!
//! assert_eq!(lookup.invoke(), Outcome::Present(6));
//! assert_eq!(lookup.count(), 1);
//! ```

mod boundary;
mod chain_macro;
mod error;
mod outcome;
mod tagged;
mod try_option;

pub use boundary::protect;
pub use error::{Failure, FailureKind};
pub use outcome::Outcome;
pub use tagged::TaggedIter;
pub use try_option::TryOption;

static_assertions::assert_not_impl_any!(TryOption<i32>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32>: Clone, PartialEq, std::fmt::Debug);
static_assertions::assert_impl_all!(Failure: std::error::Error, Clone);
