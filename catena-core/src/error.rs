//! Error types for Catena.
//!
//! Naming and classification never fail, so everything here belongs to the
//! invocation path:
//!
//! - [`BoxError`] - The payload carried by a rejected [`Promise`]
//! - [`InvokeError`] - Failures raised while running a component method
//! - [`ArgError`] - Typed access to invocation arguments
//!
//! [`Promise`]: crate::Promise

use std::any::Any;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while invoking a component method.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The method panicked, either while being called or while its
    /// asynchronous result was being driven.
    #[error("method panicked: {0}")]
    Panic(String),

    /// A custom invocation error.
    #[error(transparent)]
    Custom(BoxError),
}

impl InvokeError {
    /// Build an [`InvokeError::Panic`] from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "non-string panic payload".to_owned(),
            },
        };
        InvokeError::Panic(message)
    }
}

impl From<BoxError> for InvokeError {
    fn from(err: BoxError) -> Self {
        InvokeError::Custom(err)
    }
}

/// Errors returned by typed argument access on [`Args`](crate::Args).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// No argument exists at the requested position.
    #[error("no argument at position {0}")]
    Missing(usize),

    /// The argument exists but holds a different type.
    #[error("argument at position {index} is not a `{expected}`")]
    TypeMismatch {
        /// Position of the argument.
        index: usize,
        /// Name of the requested type.
        expected: &'static str,
    },
}
