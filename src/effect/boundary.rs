//! The protective boundary around every call into user code.
//!
//! [`protect`] runs a closure under `catch_unwind` and turns an unwinding
//! panic into [`Outcome::Failed`]. Deferred computations go through it when
//! they are invoked, and every mapper, binder, predicate and folder is run
//! through it again, so a fault is captured at the stage where it happens.
//!
//! Panic capture needs `panic = "unwind"`. Under `panic = "abort"` the
//! process aborts before the boundary can observe anything.

use std::any::Any;
use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use log::{debug, trace};

use super::error::Failure;
use super::outcome::Outcome;

/// Runs `computation`, converting a panic into a failed outcome.
///
/// # Examples
///
/// ```rust
/// use tryopt::effect::{Outcome, protect};
///
/// assert_eq!(protect(|| Outcome::Present(1)), Outcome::Present(1));
///
/// let failed: Outcome<i32> = protect(|| panic!("exploded"));
/// assert_eq!(failed.failure().map(|failure| failure.message().to_string()),
///            Some("exploded".to_string()));
/// ```
pub fn protect<T, F>(computation: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(outcome) => outcome,
        Err(payload) => Outcome::Failed(capture_panic(&*payload)),
    }
}

/// Runs a plain user function, returning the captured panic as `Err`.
pub(crate) fn guard<R, F>(function: F) -> Result<R, Failure>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| capture_panic(&*payload))
}

/// Continues a pipeline: on `Present` runs `next` under the boundary,
/// otherwise passes absence or the original failure through untouched.
pub(crate) fn continue_with<T, R, F>(outcome: Outcome<T>, next: F) -> Outcome<R>
where
    F: FnOnce(T) -> Outcome<R>,
{
    match outcome {
        Outcome::Present(value) => protect(|| next(value)),
        Outcome::Absent => Outcome::Absent,
        Outcome::Failed(failure) => Outcome::Failed(failure),
    }
}

/// Records an error value returned by user code.
pub(crate) fn raise<E>(error: E) -> Failure
where
    E: Error + 'static,
{
    trace!("captured error: {error}");
    Failure::new(error)
}

fn capture_panic(payload: &(dyn Any + Send)) -> Failure {
    let message = if let Some(string) = payload.downcast_ref::<&str>() {
        (*string).to_string()
    } else if let Some(string) = payload.downcast_ref::<String>() {
        string.clone()
    } else {
        "unknown panic".to_string()
    };
    debug!("captured panic: {message}");
    Failure::panicked(message)
}
