#![allow(dead_code)]

use catena::{Args, BoxError, Method, Module, Promise, async_method, method};
use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Test Modules
// ============================================================================

/// A hand-written component module with a specific click handler, a generic
/// handler and a few lifecycle methods.
pub struct Widget {
    pub label: String,
    pub clicks: AtomicUsize,
    pub generic_calls: Mutex<Vec<Option<String>>>,
}

impl Widget {
    pub fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            clicks: AtomicUsize::new(0),
            generic_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn generic_calls(&self) -> Vec<Option<String>> {
        self.generic_calls.lock().unwrap().clone()
    }
}

impl Module for Widget {
    type Output = String;

    fn capability(&self, key: &str) -> Option<Method<Self>> {
        match key {
            "handleClick" => Some(method(|widget: &Widget, _args: Args| {
                widget.clicks.fetch_add(1, Ordering::SeqCst);
                format!("{} clicked", widget.label)
            })),
            "handle" => Some(method(|widget: &Widget, args: Args| {
                let name = args.hook_name().map(str::to_owned);
                widget.generic_calls.lock().unwrap().push(name.clone());
                format!("{} handled {}", widget.label, name.unwrap_or_default())
            })),
            "render" => Some(async_method(|widget: &Widget, _args| {
                let label = widget.label.clone();
                async move { Ok::<_, BoxError>(format!("<{label}/>")) }
            })),
            "unbind" => Some(method(|_: &Widget, _args| {
                Err::<String, _>(io::Error::other("unbind failed"))
            })),
            "bind" => Some(method(|_: &Widget, _args| -> Promise<String> {
                panic!("bind exploded")
            })),
            _ => None,
        }
    }
}

/// A module without any methods.
pub struct Inert;

impl Module for Inert {
    type Output = ();

    fn capability(&self, _key: &str) -> Option<Method<Self>> {
        None
    }
}
