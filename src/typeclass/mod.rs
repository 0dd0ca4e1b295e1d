//! Type class traits shared by the two-state optionals.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GATs
//! - [`Functor`]: mapping over a present value
//! - [`Monad`]: sequencing with `flat_map`
//! - [`Foldable`]: folding, counting and existence queries
//!
//! These traits are the narrow contract the deferred computations rely on
//! when they inspect a two-state optional: present/absent discrimination,
//! `fmap`, `fold_left`, `length`, `exists` and `for_all`. They are
//! implemented for `Option<T>` and, with the `control` feature, for
//! [`UnsafeOptional<T>`](crate::control::UnsafeOptional).
//!
//! # Examples
//!
//! ```rust
//! use tryopt::typeclass::{Foldable, Functor, Monad};
//!
//! let value = Some(20).fmap(|n| n + 1).flat_map(|n| Some(n * 2));
//! assert_eq!(value, Some(42));
//! assert_eq!(value.length(), 1);
//! ```

mod foldable;
mod functor;
mod higher;
mod monad;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
