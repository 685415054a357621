//! # catena-std
//!
//! Standard implementations for the Catena component conventions.
//!
//! This crate provides:
//! - **Map-backed modules**: [`MethodTable`](table::MethodTable) and its builder
//! - **Instrumentation**: [`TracedModule`](traced::TracedModule)
//! - **Testing utilities**: [`RecordingModule`](testing::RecordingModule)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use catena_core;

// Modules
pub mod table;
pub mod testing;
pub mod traced;
