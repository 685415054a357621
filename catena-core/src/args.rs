//! Invocation arguments.
//!
//! Component methods take a positional, type-erased argument list. When a
//! generic handler is resolved, the dispatcher prepends the hook name as an
//! `Option<String>` at position 0, so the handler can read it back with
//! [`Args::hook_name`].

use crate::error::ArgError;
use std::{
    any::{Any, type_name},
    collections::VecDeque,
    fmt,
};

/// A positional list of type-erased invocation arguments.
#[derive(Default)]
pub struct Args {
    values: VecDeque<Box<dyn Any + Send + Sync>>,
}

impl Args {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument, builder style.
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append an argument.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push_back(Box::new(value));
    }

    /// Insert an argument in front of all others.
    pub fn prepend<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push_front(Box::new(value));
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The argument at `index`, if it exists and has type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        let value = self.values.get(index)?;
        (**value).downcast_ref::<T>()
    }

    /// The argument at `index`, reporting why it is unavailable.
    pub fn try_get<T: Any>(&self, index: usize) -> Result<&T, ArgError> {
        let value = self.values.get(index).ok_or(ArgError::Missing(index))?;
        (**value)
            .downcast_ref::<T>()
            .ok_or(ArgError::TypeMismatch {
                index,
                expected: type_name::<T>(),
            })
    }

    /// The hook name pre-applied to a generic handler.
    ///
    /// `None` when position 0 is not an `Option<String>` or when the handler
    /// was resolved without a name.
    pub fn hook_name(&self) -> Option<&str> {
        self.get::<Option<String>>(0)?.as_deref()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.len()).finish()
    }
}
