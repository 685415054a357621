//! # Component Modules
//!
//! A module is the implementation behind a component: a capability bag of
//! named callables. The dispatcher never inspects a module beyond asking
//! whether it has a callable under a given key, which is exactly what
//! [`Module::capability`] answers.
//!
//! # Usage Patterns
//!
//! 1. **Hand-written lookup**: `match key { "handleClick" => Some(method(..)), _ => None }`
//! 2. **Map-backed table**: `MethodTableBuilder` in `catena-std`
//!
//! ```rust,ignore
//! struct Counter { label: String }
//!
//! impl Module for Counter {
//!     type Output = String;
//!
//!     fn capability(&self, key: &str) -> Option<Method<Self>> {
//!         match key {
//!             "render" => Some(method(|counter: &Counter, _args| counter.label.clone())),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::{
    args::Args,
    error::BoxError,
    promise::{IntoPromise, Promise},
};
use std::{future::Future, sync::Arc};

/// A callable found on a module, invoked with the module and its arguments.
pub type Method<M> = Arc<dyn Fn(&M, Args) -> Promise<<M as Module>::Output> + Send + Sync>;

/// A capability bag of named methods.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a component `Module`",
    label = "missing `Module` implementation",
    note = "Modules must implement `capability` to expose their methods by name."
)]
pub trait Module: Send + Sync + 'static {
    /// The value every method of this module resolves to.
    type Output: Send + 'static;

    /// The callable stored under `key`, if any.
    fn capability(&self, key: &str) -> Option<Method<Self>>;
}

/// Wrap a synchronous function as a [`Method`].
///
/// The function may return anything convertible with [`IntoPromise`].
pub fn method<M, F, R>(f: F) -> Method<M>
where
    M: Module,
    F: Fn(&M, Args) -> R + Send + Sync + 'static,
    R: IntoPromise<Output = M::Output>,
{
    Arc::new(move |module: &M, args: Args| f(module, args).into_promise())
}

/// Wrap an asynchronous function as a [`Method`].
///
/// The returned future cannot borrow the module; copy what it needs first.
pub fn async_method<M, F, Fut, E>(f: F) -> Method<M>
where
    M: Module,
    F: Fn(&M, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<M::Output, E>> + Send + 'static,
    E: Into<BoxError>,
{
    Arc::new(move |module: &M, args: Args| Promise::from_future(f(module, args)))
}
