//! # catena-core
//!
//! Component conventions for Catena: the vocabulary shared by the renderer,
//! the lifecycle orchestrator and component implementations.
//!
//! Everything here is pure except the invocation path, which produces
//! [`Promise`]s.
//!
//! # Building Blocks
//!
//! ## Naming
//!
//! Logical component names and DOM tag names map onto each other through a
//! prefix (`widget` ⇄ `CAT-WIDGET`) and a small reserved table (`document` ⇄
//! `HTML`, `head` ⇄ `HEAD`). See [`tag_name_for_component`] and
//! [`original_component_name`]. Naming functions accept any [`AsName`] value
//! and degrade to an empty string on non-string input.
//!
//! ## Classification
//!
//! [`is_component_node`] tells component elements apart from plain nodes for
//! anything implementing [`DomNode`].
//!
//! ## Dispatch
//!
//! [`resolve_method`] looks up a lifecycle method on a [`Module`] by
//! convention: the specific method (`handleClick`), then the generic one
//! (`handle`, called with `"click"`), then a no-op.
//!
//! ## Invocation
//!
//! [`safe_invoke`] runs an action and reports values, errors, panics and
//! returned promises through a single [`Promise`].
//!
//! # Error Types
//!
//! - [`InvokeError`] - Panics and custom failures during invocation
//! - [`ArgError`] - Typed argument access

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod camel;
pub mod conventions;
mod dispatch;
mod error;
mod input;
mod module;
mod naming;
mod node;
mod promise;

// Re-exports
pub use args::Args;
pub use camel::camel_case_name;
pub use dispatch::{BoundMethod, Resolution, resolve_method};
pub use error::{ArgError, BoxError, InvokeError};
pub use input::{AsName, with_name};
pub use module::{Method, Module, async_method, method};
pub use naming::{
    error_template_name, is_document_component, is_head_component, original_component_name,
    tag_name_for_component,
};
pub use node::{DomNode, NodeInfo, is_component_node};
pub use promise::{IntoPromise, Promise, Resolved, safe_invoke};
