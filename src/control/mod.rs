//! Two-state optional values without a failure channel.
//!
//! - [`UnsafeOptional`]: a present/absent value whose present arm may hold an
//!   empty payload, never flattened or validated
//! - [`match_all`], [`fold_all`], [`somes`]: combinators over whole sequences
//!   of [`UnsafeOptional`] values
//!
//! # Examples
//!
//! ```rust
//! use tryopt::control::{UnsafeOptional, fold_all, match_all};
//!
//! let items = vec![UnsafeOptional::some(1), UnsafeOptional::none(), UnsafeOptional::some(2)];
//!
//! let matched: Vec<i32> = match_all(items.clone(), |x| [x], || [0]).collect();
//! assert_eq!(matched, vec![1, 0, 2]);
//!
//! assert_eq!(fold_all(items, 0, |sum, x| sum + x), 3);
//! ```

mod sequence;
mod unsafe_optional;

pub use sequence::{MatchAll, fold_all, match_all, somes};
pub use unsafe_optional::UnsafeOptional;
