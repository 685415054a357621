//! Map-backed modules.
//!
//! A [`MethodTable`] pairs component state with a `HashMap` of methods keyed
//! by name. It is the default way to build a [`Module`] without writing a
//! `capability` match by hand.

use catena_core::{Args, BoxError, IntoPromise, Method, Module, Promise};
use std::{collections::HashMap, future::Future, sync::Arc};
use thiserror::Error;

type StateMethod<S, T> = Arc<dyn Fn(&S, Args) -> Promise<T> + Send + Sync>;

/// Errors that can occur while building a [`MethodTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A method with this key is already registered.
    #[error("method already registered: {0}")]
    DuplicateMethod(String),
}

/// A module whose methods live in a map.
pub struct MethodTable<S, T> {
    state: S,
    methods: HashMap<String, StateMethod<S, T>>,
}

impl<S, T> MethodTable<S, T> {
    /// The component state the methods operate on.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the table has no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Whether a method is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.methods.contains_key(key)
    }
}

impl<S, T> Module for MethodTable<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn capability(&self, key: &str) -> Option<Method<Self>> {
        let method = Arc::clone(self.methods.get(key)?);
        Some(Arc::new(move |table: &Self, args: Args| {
            method(&table.state, args)
        }))
    }
}

/// Builder for [`MethodTable`].
pub struct MethodTableBuilder<S, T> {
    state: S,
    methods: HashMap<String, StateMethod<S, T>>,
    allow_duplicates: bool,
}

impl<S, T> MethodTableBuilder<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    /// Start a table around `state`.
    pub fn new(state: S) -> Self {
        Self {
            state,
            methods: HashMap::new(),
            allow_duplicates: false,
        }
    }

    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Register a synchronous method.
    pub fn insert<F, R>(&mut self, key: impl Into<String>, f: F) -> Result<(), BuildError>
    where
        F: Fn(&S, Args) -> R + Send + Sync + 'static,
        R: IntoPromise<Output = T>,
    {
        self.insert_method(
            key.into(),
            Arc::new(move |state: &S, args: Args| f(state, args).into_promise()),
        )
    }

    /// Register an asynchronous method.
    pub fn insert_async<F, Fut, E>(
        &mut self,
        key: impl Into<String>,
        f: F,
    ) -> Result<(), BuildError>
    where
        F: Fn(&S, Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        self.insert_method(
            key.into(),
            Arc::new(move |state: &S, args: Args| Promise::from_future(f(state, args))),
        )
    }

    fn insert_method(&mut self, key: String, method: StateMethod<S, T>) -> Result<(), BuildError> {
        if !self.allow_duplicates && self.methods.contains_key(&key) {
            return Err(BuildError::DuplicateMethod(key));
        }
        self.methods.insert(key, method);
        Ok(())
    }

    /// Build the table, ready to be handed to the dispatcher.
    pub fn build(self) -> Arc<MethodTable<S, T>> {
        Arc::new(MethodTable {
            state: self.state,
            methods: self.methods,
        })
    }
}
