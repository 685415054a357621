//! Asynchronous results of component methods.
//!
//! A [`Promise`] is a boxed `Send` future settling to `Result<T, BoxError>`.
//! It has two producers, [`Promise::resolve`] and [`Promise::reject`], plus
//! [`Promise::from_future`] for work that settles later.
//!
//! [`IntoPromise`] is the single conversion point used by [`safe_invoke`]:
//! plain values resolve immediately, `Result`s settle according to their
//! variant, and a returned `Promise` is passed through rather than nested.

use crate::error::{BoxError, InvokeError};
use futures::{
    FutureExt,
    future::{self, BoxFuture},
};
use std::{
    fmt,
    future::Future,
    panic::{self, AssertUnwindSafe},
    pin::Pin,
    task::{Context, Poll},
};

/// An asynchronous result that resolves to `T` or rejects with a [`BoxError`].
#[must_use = "promises do nothing unless awaited"]
pub struct Promise<T> {
    inner: BoxFuture<'static, Result<T, BoxError>>,
}

impl<T: Send + 'static> Promise<T> {
    /// A promise already resolved with `value`.
    pub fn resolve(value: T) -> Self {
        Self {
            inner: future::ready(Ok(value)).boxed(),
        }
    }

    /// A promise already rejected with `error`.
    pub fn reject(error: impl Into<BoxError>) -> Self {
        Self {
            inner: future::ready(Err(error.into())).boxed(),
        }
    }

    /// A promise settling with the output of `future`.
    pub fn from_future<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self {
            inner: future.map(|result| result.map_err(Into::into)).boxed(),
        }
    }

    /// Transform the resolved value.
    pub fn map<U, F>(self, f: F) -> Promise<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Promise {
            inner: self.inner.map(|result| result.map(f)).boxed(),
        }
    }

    /// Turn a panic while this promise is polled into a rejection.
    pub fn catch_panics(self) -> Self {
        Self {
            inner: AssertUnwindSafe(self.inner)
                .catch_unwind()
                .map(|outcome| match outcome {
                    Ok(result) => result,
                    Err(payload) => Err(Box::new(InvokeError::from_panic(payload)) as BoxError),
                })
                .boxed(),
        }
    }
}

impl<T> Future for Promise<T> {
    type Output = Result<T, BoxError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl<T> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise").finish_non_exhaustive()
    }
}

/// Wrapper resolving any value as is.
///
/// Use it to return types that have no [`IntoPromise`] implementation of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolved<T>(pub T);

/// Conversion of a method's return value into a [`Promise`].
///
/// # Default Implementations
///
/// - `Promise<T>` → Passed through
/// - `Result<T, E>` → Resolved with `T` or rejected with `E`
/// - `Resolved<T>`, `Option<T>`, `Vec<T>` → Resolved as is
/// - `()`, `bool`, numbers, `char`, `String`, `&'static str` → Resolved as is
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a `Promise`",
    label = "missing `IntoPromise` implementation",
    note = "Wrap the value in `Resolved(..)` or return a `Result` or `Promise`."
)]
pub trait IntoPromise {
    /// The value the promise resolves to.
    type Output: Send + 'static;

    /// Convert into a promise.
    fn into_promise(self) -> Promise<Self::Output>;
}

impl<T: Send + 'static> IntoPromise for Promise<T> {
    type Output = T;

    fn into_promise(self) -> Promise<T> {
        self
    }
}

impl<T, E> IntoPromise for Result<T, E>
where
    T: Send + 'static,
    E: Into<BoxError>,
{
    type Output = T;

    fn into_promise(self) -> Promise<T> {
        match self {
            Ok(value) => Promise::resolve(value),
            Err(error) => Promise::reject(error),
        }
    }
}

impl<T: Send + 'static> IntoPromise for Resolved<T> {
    type Output = T;

    fn into_promise(self) -> Promise<T> {
        Promise::resolve(self.0)
    }
}

impl<T: Send + 'static> IntoPromise for Option<T> {
    type Output = Option<T>;

    fn into_promise(self) -> Promise<Option<T>> {
        Promise::resolve(self)
    }
}

impl<T: Send + 'static> IntoPromise for Vec<T> {
    type Output = Vec<T>;

    fn into_promise(self) -> Promise<Vec<T>> {
        Promise::resolve(self)
    }
}

macro_rules! resolve_as_is {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoPromise for $ty {
                type Output = $ty;

                fn into_promise(self) -> Promise<$ty> {
                    Promise::resolve(self)
                }
            }
        )*
    };
}

resolve_as_is!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

/// Runs `action` and reports every outcome through one [`Promise`].
///
/// - A panic during the call rejects with [`InvokeError::Panic`].
/// - An `Err` return rejects with that error.
/// - A returned promise is passed through; a panic while it is polled also
///   rejects with [`InvokeError::Panic`].
/// - Any other value resolves immediately.
pub fn safe_invoke<F, R>(action: F) -> Promise<R::Output>
where
    F: FnOnce() -> R,
    R: IntoPromise,
{
    match panic::catch_unwind(AssertUnwindSafe(|| action().into_promise())) {
        Ok(promise) => promise.catch_panics(),
        Err(payload) => Promise::reject(InvokeError::from_panic(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn plain_values_resolve() {
        assert_eq!(safe_invoke(|| 42).await.unwrap(), 42);
        assert_eq!(safe_invoke(|| "ok").await.unwrap(), "ok");
        safe_invoke(|| ()).await.unwrap();
    }

    #[tokio::test]
    async fn errors_reject() {
        let err = safe_invoke(|| Err::<u8, _>(io::Error::other("x")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "x");
    }

    #[tokio::test]
    async fn panics_reject() {
        let err = safe_invoke(|| -> u8 { panic!("x") }).await.unwrap_err();
        let invoke = err.downcast_ref::<InvokeError>().unwrap();
        assert!(matches!(invoke, InvokeError::Panic(m) if m == "x"));
    }

    #[tokio::test]
    async fn returned_promises_pass_through() {
        let resolved = safe_invoke(|| Promise::resolve(5_u8)).await.unwrap();
        assert_eq!(resolved, 5);

        let rejected = safe_invoke(|| Promise::<u8>::reject("late")).await;
        assert_eq!(rejected.unwrap_err().to_string(), "late");

        let deferred = safe_invoke(|| {
            Promise::from_future(async { Ok::<_, io::Error>(String::from("later")) })
        });
        assert_eq!(deferred.await.unwrap(), "later");
    }

    #[tokio::test]
    async fn panics_while_polling_reject() {
        let promise = safe_invoke(|| {
            Promise::from_future(async {
                if true {
                    panic!("inside");
                }
                Ok::<u8, BoxError>(0)
            })
        });
        let err = promise.await.unwrap_err();
        assert!(err.to_string().contains("inside"));
    }

    #[tokio::test]
    async fn map_and_resolved_wrapper() {
        #[derive(Debug, PartialEq)]
        struct View(u8);

        let view = safe_invoke(|| Resolved(View(3))).await.unwrap();
        assert_eq!(view, View(3));

        let doubled = Promise::resolve(4_u32).map(|n| n * 2).await.unwrap();
        assert_eq!(doubled, 8);
    }
}
