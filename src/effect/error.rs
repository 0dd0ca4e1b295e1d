//! Error type carried by failed outcomes.
//!
//! A [`Failure`] records an error that was raised while a deferred
//! computation produced or transformed its value. It is either a panic that
//! unwound out of user code, or an `Err` returned by a fallible user function.

use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// How a [`Failure`] came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A panic unwound out of user code and was caught at the boundary.
    Panicked,
    /// User code returned an error value.
    Raised,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked => formatter.write_str("panicked"),
            Self::Raised => formatter.write_str("raised"),
        }
    }
}

/// An error captured inside a deferred computation.
///
/// Two failures compare equal when their kind and message match; the wrapped
/// source error (if any) is not compared.
///
/// # Examples
///
/// ```rust
/// use tryopt::effect::{Failure, FailureKind};
///
/// let failure = Failure::new(std::fmt::Error);
/// assert_eq!(failure.kind(), FailureKind::Raised);
/// assert!(failure.downcast_ref::<std::fmt::Error>().is_some());
///
/// let panic = Failure::panicked("index out of bounds");
/// assert_eq!(panic.message(), "index out of bounds");
/// assert_eq!(format!("{panic}"), "index out of bounds");
/// ```
#[derive(Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    source: Option<Rc<dyn Error + 'static>>,
}

impl Failure {
    /// Wraps an error value returned by user code.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + 'static,
    {
        Self {
            kind: FailureKind::Raised,
            message: error.to_string(),
            source: Some(Rc::new(error)),
        }
    }

    /// A raised failure carrying only a message.
    pub fn raised(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Raised,
            message: message.into(),
            source: None,
        }
    }

    /// A failure describing a caught panic.
    pub fn panicked(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Panicked,
            message: message.into(),
            source: None,
        }
    }

    /// How this failure came about.
    #[inline]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The error message (the panic message for caught panics).
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this failure is a caught panic.
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == FailureKind::Panicked
    }

    /// Borrows the wrapped error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Failure")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Failure {}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref()
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::raised(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::raised(message)
    }
}
