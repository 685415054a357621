//! A module wrapper that instruments method calls with `tracing` spans.

use catena_core::{Args, Method, Module};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use catena_core::Promise;
#[cfg(feature = "tracing")]
use tracing::Instrument;

/// Wraps a module so every call of its methods runs inside a span.
///
/// The span (`component_method`) carries the component label and the
/// method key. It covers both the synchronous call and the returned
/// promise. Without the `tracing` feature the wrapper only delegates.
pub struct TracedModule<M> {
    inner: Arc<M>,
    component: &'static str,
}

impl<M> TracedModule<M> {
    /// Create a new traced wrapper around a module.
    pub fn new(inner: Arc<M>, component: &'static str) -> Self {
        Self { inner, component }
    }

    /// The component label attached to spans.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// The wrapped module.
    pub fn inner(&self) -> &Arc<M> {
        &self.inner
    }
}

impl<M> Clone for TracedModule<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            component: self.component,
        }
    }
}

impl<M: Module> Module for TracedModule<M> {
    type Output = M::Output;

    #[cfg(feature = "tracing")]
    fn capability(&self, key: &str) -> Option<Method<Self>> {
        let method = self.inner.capability(key)?;
        let key = key.to_owned();
        Some(Arc::new(move |traced: &Self, args: Args| {
            let span = tracing::info_span!(
                "component_method",
                component = %traced.component,
                method = %key
            );
            let promise = span.in_scope(|| method(&*traced.inner, args));
            Promise::from_future(promise.instrument(span))
        }))
    }

    #[cfg(not(feature = "tracing"))]
    fn capability(&self, key: &str) -> Option<Method<Self>> {
        let method = self.inner.capability(key)?;
        Some(Arc::new(move |traced: &Self, args: Args| {
            method(&*traced.inner, args)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MethodTableBuilder;
    use catena_core::{Resolution, resolve_method};

    #[tokio::test]
    async fn traced_module_delegates() {
        let mut builder = MethodTableBuilder::new(String::from("list"));
        builder
            .insert("render", |label: &String, _| format!("<{label}>"))
            .unwrap();
        let traced = Arc::new(TracedModule::new(builder.build(), "list"));
        assert_eq!(traced.component(), "list");
        assert_eq!(traced.inner().len(), 1);

        let bound = resolve_method(Some(&traced), "render", None);
        assert_eq!(bound.resolution(), Resolution::Generic);
        assert_eq!(
            bound.call(Args::new()).await.unwrap().as_deref(),
            Some("<list>")
        );

        let missing = resolve_method(Some(&traced), "unbind", None);
        assert_eq!(missing.resolution(), Resolution::Default);
    }
}
