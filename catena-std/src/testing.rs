//! Testing utilities for Catena.
//!
//! This module provides utilities to make testing dispatch easier.
//!
//! # Features
//!
//! - [`RecordingModule`]: A module that records every method call it receives
//! - [`RecordedCall`]: One recorded call

use catena_core::{Args, Method, Module, Promise};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// A single call observed by a [`RecordingModule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The key the called method was registered under.
    pub key: String,
    /// The hook name pre-applied by the dispatcher, if any.
    pub hook_name: Option<String>,
    /// Number of arguments the method received.
    pub arg_count: usize,
}

enum Behavior {
    Resolve,
    Reject(String),
}

/// A module that records all calls to its methods.
///
/// Useful for verifying which method the dispatcher picked and with which
/// arguments.
///
/// # Example
///
/// ```rust,ignore
/// let module = Arc::new(RecordingModule::new("done").with_method("handleClick"));
///
/// resolve_method(Some(&module), "handle", Some("click")).call(Args::new()).await?;
///
/// assert_eq!(module.calls()[0].key, "handleClick");
/// ```
pub struct RecordingModule<T> {
    methods: HashMap<String, Behavior>,
    calls: Mutex<Vec<RecordedCall>>,
    output: T,
}

impl<T: Clone> RecordingModule<T> {
    /// Create a module without methods; bound methods resolve with `output`.
    pub fn new(output: T) -> Self {
        Self {
            methods: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            output,
        }
    }

    /// Add a method that resolves with the module's output.
    pub fn with_method(mut self, key: impl Into<String>) -> Self {
        self.methods.insert(key.into(), Behavior::Resolve);
        self
    }

    /// Add a method that rejects with `message`.
    pub fn with_failing_method(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.methods
            .insert(key.into(), Behavior::Reject(message.into()));
        self
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Module for RecordingModule<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = T;

    fn capability(&self, key: &str) -> Option<Method<Self>> {
        if !self.methods.contains_key(key) {
            return None;
        }
        let key = key.to_owned();
        Some(Arc::new(move |module: &Self, args: Args| {
            module.lock().push(RecordedCall {
                key: key.clone(),
                hook_name: args.hook_name().map(str::to_owned),
                arg_count: args.len(),
            });
            match module.methods.get(&key) {
                Some(Behavior::Reject(message)) => Promise::reject(message.clone()),
                _ => Promise::resolve(module.output.clone()),
            }
        }))
    }
}
