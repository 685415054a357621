//! # catena - Component Conventions for Rendering Pipelines
//!
//! `catena` is the convention layer between a component-based renderer and
//! the components it hosts. It answers four questions:
//!
//! - Which tag is a component rendered as, and which component does a tag
//!   belong to? ([`tag_name_for_component`], [`original_component_name`])
//! - Is this DOM node a component? ([`is_component_node`])
//! - Which method handles this lifecycle hook or event? ([`resolve_method`])
//! - How did the call go? ([`safe_invoke`], [`Promise`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catena::prelude::*;
//!
//! let mut builder = MethodTableBuilder::new(());
//! builder.insert("handle", |_: &(), args: Args| {
//!     format!("handled {}", args.hook_name().unwrap_or("?"))
//! })?;
//! let module = builder.build();
//!
//! // No `handleSubmit`, so the generic `handle` receives "submit".
//! let method = resolve_method(Some(&module), "handle", Some("submit"));
//! let out = method.invoke(Args::new()).await?;
//! assert_eq!(out.as_deref(), Some("handled submit"));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use catena_core::{
    // Arguments
    Args,
    // Naming
    AsName,
    // Errors
    ArgError,
    BoxError,
    // Dispatch
    BoundMethod,
    // Classification
    DomNode,
    // Invocation
    IntoPromise,
    InvokeError,
    // Modules
    Method,
    Module,
    NodeInfo,
    Promise,
    Resolution,
    Resolved,
    async_method,
    camel_case_name,
    error_template_name,
    is_component_node,
    is_document_component,
    is_head_component,
    method,
    original_component_name,
    resolve_method,
    safe_invoke,
    tag_name_for_component,
    with_name,
};

/// The fixed component vocabulary.
pub mod conventions {
    pub use catena_core::conventions::{
        ATTRIBUTE_NODE_TYPE, COMPONENT_ERROR_TEMPLATE_POSTFIX, COMPONENT_ID, COMPONENT_PREFIX,
        DOCUMENT_COMPONENT_NAME, DOCUMENT_ELEMENT_NAME, DOCUMENT_TAG_NAME, ELEMENT_NODE_TYPE,
        HEAD_COMPONENT_NAME, HEAD_TAG_NAME,
    };
}

// Map-backed modules
pub use catena_std::table::{BuildError, MethodTable, MethodTableBuilder};

// Instrumentation
pub use catena_std::traced::TracedModule;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use catena_std::testing::*;
}

/// Prelude module - common imports for Catena.
///
/// # Usage
///
/// ```rust,ignore
/// use catena::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Args, BoundMethod, BoxError, DomNode, IntoPromise, Method, MethodTableBuilder, Module,
        NodeInfo, Promise, Resolution, Resolved, error_template_name, is_component_node,
        original_component_name, resolve_method, safe_invoke, tag_name_for_component,
    };
}
