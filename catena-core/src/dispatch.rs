//! # Method Dispatch
//!
//! Finds the lifecycle method to invoke on a component module, e.g. the
//! handler of a `click` event with prefix `handle`.
//!
//! # Precedence
//!
//! 1. **Specific**: a method named `camel_case_name(prefix, name)`
//!    (`handleClick`), bound with no pre-applied arguments.
//! 2. **Generic**: a method named exactly `prefix` (`handle`), bound with
//!    the name pre-applied as its first argument, so one handler can serve
//!    a whole family of hooks.
//! 3. **Default**: a no-op resolving with no value.
//!
//! Resolution itself never fails; failures only surface once the bound
//! method is called.

use crate::{
    args::Args,
    camel::camel_case_name,
    module::{Method, Module},
    promise::{Promise, safe_invoke},
};
use std::{fmt, sync::Arc};

/// Which rule produced a [`BoundMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The method named after prefix and name.
    Specific,
    /// The method named after the prefix alone, with the name pre-applied.
    Generic,
    /// The no-op fallback.
    Default,
}

enum Binding<M: Module> {
    Specific {
        module: Arc<M>,
        method: Method<M>,
    },
    Generic {
        module: Arc<M>,
        method: Method<M>,
        name: Option<String>,
    },
    Default,
}

/// A method bound to its module, ready to be called.
pub struct BoundMethod<M: Module> {
    binding: Binding<M>,
}

impl<M: Module> BoundMethod<M> {
    /// The no-op method: resolves with no value.
    pub fn noop() -> Self {
        Self {
            binding: Binding::Default,
        }
    }

    /// The rule this method was resolved by.
    pub fn resolution(&self) -> Resolution {
        match self.binding {
            Binding::Specific { .. } => Resolution::Specific,
            Binding::Generic { .. } => Resolution::Generic,
            Binding::Default => Resolution::Default,
        }
    }

    /// Call the method.
    ///
    /// Resolves with `Some(output)` for a bound method and with `None` for
    /// the no-op. A panic inside the method unwinds through this call; use
    /// [`invoke`](Self::invoke) to receive it as a rejection instead.
    pub fn call(&self, args: Args) -> Promise<Option<M::Output>> {
        match &self.binding {
            Binding::Specific { module, method } => method(&**module, args).map(Some),
            Binding::Generic {
                module,
                method,
                name,
            } => {
                let mut args = args;
                args.prepend(name.clone());
                method(&**module, args).map(Some)
            }
            Binding::Default => Promise::resolve(None),
        }
    }

    /// Call the method through [`safe_invoke`].
    pub fn invoke(&self, args: Args) -> Promise<Option<M::Output>> {
        safe_invoke(|| self.call(args))
    }
}

impl<M: Module> Clone for BoundMethod<M> {
    fn clone(&self) -> Self {
        let binding = match &self.binding {
            Binding::Specific { module, method } => Binding::Specific {
                module: Arc::clone(module),
                method: Arc::clone(method),
            },
            Binding::Generic {
                module,
                method,
                name,
            } => Binding::Generic {
                module: Arc::clone(module),
                method: Arc::clone(method),
                name: name.clone(),
            },
            Binding::Default => Binding::Default,
        };
        Self { binding }
    }
}

impl<M: Module> fmt::Debug for BoundMethod<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("BoundMethod");
        debug.field("resolution", &self.resolution());
        if let Binding::Generic { name, .. } = &self.binding {
            debug.field("name", name);
        }
        debug.finish()
    }
}

/// Resolve the method to invoke on `module` for `prefix` and `name`.
///
/// An absent module resolves to [`BoundMethod::noop`].
pub fn resolve_method<M: Module>(
    module: Option<&Arc<M>>,
    prefix: &str,
    name: Option<&str>,
) -> BoundMethod<M> {
    let Some(module) = module else {
        #[cfg(feature = "tracing")]
        tracing::trace!(prefix, ?name, "no module, using default method");
        return BoundMethod::noop();
    };

    let method_name = camel_case_name(prefix, name.unwrap_or_default());
    if let Some(method) = module.capability(&method_name) {
        #[cfg(feature = "tracing")]
        tracing::trace!(prefix, method = %method_name, "resolved specific method");
        return BoundMethod {
            binding: Binding::Specific {
                module: Arc::clone(module),
                method,
            },
        };
    }

    if let Some(method) = module.capability(prefix) {
        #[cfg(feature = "tracing")]
        tracing::trace!(prefix, ?name, "resolved generic method");
        return BoundMethod {
            binding: Binding::Generic {
                module: Arc::clone(module),
                method,
                name: name.map(str::to_owned),
            },
        };
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(prefix, ?name, "no method found, using default method");
    BoundMethod::noop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::method;

    struct Probe {
        keys: &'static [&'static str],
    }

    impl Module for Probe {
        type Output = String;

        fn capability(&self, key: &str) -> Option<Method<Self>> {
            let key = self.keys.iter().find(|k| **k == key)?;
            let key = (*key).to_owned();
            Some(method(move |_probe: &Probe, args: Args| {
                match args.hook_name() {
                    Some(name) => format!("{key}({name})"),
                    None => format!("{key}()"),
                }
            }))
        }
    }

    fn probe(keys: &'static [&'static str]) -> Arc<Probe> {
        Arc::new(Probe { keys })
    }

    #[tokio::test]
    async fn specific_wins_over_generic() {
        let module = probe(&["handleClick", "handle"]);
        let bound = resolve_method(Some(&module), "handle", Some("click"));
        assert_eq!(bound.resolution(), Resolution::Specific);
        assert_eq!(bound.call(Args::new()).await.unwrap().as_deref(), Some("handleClick()"));
    }

    #[tokio::test]
    async fn generic_receives_name() {
        let module = probe(&["handle"]);
        let bound = resolve_method(Some(&module), "handle", Some("submit"));
        assert_eq!(bound.resolution(), Resolution::Generic);
        assert_eq!(bound.call(Args::new()).await.unwrap().as_deref(), Some("handle(submit)"));
    }

    #[tokio::test]
    async fn default_resolves_nothing() {
        let module = probe(&["render"]);
        let bound = resolve_method(Some(&module), "handle", Some("click"));
        assert_eq!(bound.resolution(), Resolution::Default);
        assert_eq!(bound.call(Args::new()).await.unwrap(), None);

        let absent = resolve_method::<Probe>(None, "handle", Some("click"));
        assert_eq!(absent.resolution(), Resolution::Default);
        assert_eq!(absent.invoke(Args::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_name_falls_back_to_generic() {
        let module = probe(&["bind"]);
        let bound = resolve_method(Some(&module), "bind", None);
        assert_eq!(bound.resolution(), Resolution::Generic);
        assert_eq!(bound.call(Args::new()).await.unwrap().as_deref(), Some("bind()"));
    }

    #[tokio::test]
    async fn separator_only_name_binds_prefix_method_directly() {
        let module = probe(&["handle"]);
        let bound = resolve_method(Some(&module), "handle", Some("--"));
        assert_eq!(bound.resolution(), Resolution::Specific);
        assert_eq!(bound.call(Args::new()).await.unwrap().as_deref(), Some("handle()"));
    }

    #[test]
    fn clones_keep_resolution() {
        let module = probe(&["handle"]);
        let bound = resolve_method(Some(&module), "handle", Some("submit"));
        let copy = bound.clone();
        assert_eq!(copy.resolution(), Resolution::Generic);
        assert!(format!("{copy:?}").contains("submit"));
    }
}
