//! # tryopt
//!
//! Deferred tri-state computations for Rust: a computation that, each time it
//! is invoked, yields a value, an explicit absence, or a captured failure.
//!
//! ## Overview
//!
//! - **Effect**: [`TryOption`](effect::TryOption), [`Outcome`](effect::Outcome),
//!   [`Failure`](effect::Failure) and the protective boundary that turns
//!   panics and errors from user code into failed outcomes
//! - **Control**: [`UnsafeOptional`](control::UnsafeOptional), a
//!   null-permitting two-state optional, and sequence-level combinators over
//!   many of them
//! - **Type Classes**: `Functor`, `Monad`, `Foldable` for the two-state
//!   optionals
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `UnsafeOptional` and sequence combinators
//! - `effect`: `TryOption` and friends
//! - `serde`: `Serialize`/`Deserialize` for `UnsafeOptional`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tryopt::prelude::*;
//!
//! let price = TryOption::new(|| Some("19"))
//!     .try_map(str::parse::<u32>)
//!     .map(|cents| cents * 100);
//!
//! let text = price.match_with(
//!     |value| format!("{value}"),
//!     || "no price".to_string(),
//!     |failure| format!("error: {failure}"),
//! );
//! assert_eq!(text, "1900");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use tryopt::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
