use std::any::{self, Any};
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use log::trace;

use super::Optional;
use crate::util::panic::payload_message;

/// Runs `f`, producing `Some` with its return value, or `None` if it panics. The panic payload can
/// be of any type, not only a string message.
///
/// This, along with the other `of_throwable` and `of_fallible` functions, is the only place where a
/// panic from a callback is caught. Every combinator on [`Optional`] lets callback panics
/// propagate. The panic hook still runs as normal before the panic is caught.
///
/// # Examples
/// ```
/// # use optionals::{of_throwable, some, none};
/// assert_eq!(of_throwable(|| "fine"), some("fine"));
/// assert_eq!(of_throwable(|| -> u8 { std::panic::panic_any(404) }), none());
/// ```
pub fn of_throwable<T, F: FnOnce() -> T>(f: F) -> Optional<T> {
    // State observed by `f` may be left inconsistent by the panic; callers opt into that.
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Optional::Some(value),
        Err(payload) => swallow_panic(payload),
    }
}

/// Awaits the future produced by `f`, producing `Some` with its output, or `None` if `f` panics
/// when called or the future panics while being polled.
///
/// # Examples
/// ```
/// # use futures::executor::block_on;
/// # use optionals::{of_throwable_async, some, none};
/// assert_eq!(block_on(of_throwable_async(async || 5)), some(5));
/// assert_eq!(block_on(of_throwable_async(async || -> u8 { panic!("rejected") })), none());
/// ```
pub async fn of_throwable_async<T, F: AsyncFnOnce() -> T>(f: F) -> Optional<T> {
    let future = match panic::catch_unwind(AssertUnwindSafe(move || f())) {
        Ok(future) => future,
        Err(payload) => return swallow_panic(payload),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Optional::Some(value),
        Err(payload) => swallow_panic(payload),
    }
}

/// Runs `f`, producing `Some` with its [`Ok`] value, or `None` if it returns an [`Err`] of any
/// type or panics.
///
/// # Examples
/// ```
/// # use optionals::{of_fallible, some, none};
/// assert_eq!(of_fallible(|| "42".parse::<u8>()), some(42));
/// assert_eq!(of_fallible(|| "forty-two".parse::<u8>()), none());
/// ```
pub fn of_fallible<T, E, F: FnOnce() -> Result<T, E>>(f: F) -> Optional<T> {
    of_throwable(f).and_then(swallow_err)
}

/// Async version of [`of_fallible`].
pub async fn of_fallible_async<T, E, F: AsyncFnOnce() -> Result<T, E>>(f: F) -> Optional<T> {
    of_throwable_async(f).await.and_then(swallow_err)
}

impl<T> Optional<T> {
    /// Equivalent to [`of_throwable`].
    pub fn of_throwable<F: FnOnce() -> T>(f: F) -> Optional<T> {
        of_throwable(f)
    }

    /// Equivalent to [`of_throwable_async`].
    pub async fn of_throwable_async<F: AsyncFnOnce() -> T>(f: F) -> Optional<T> {
        of_throwable_async(f).await
    }

    /// Equivalent to [`of_fallible`].
    pub fn of_fallible<E, F: FnOnce() -> Result<T, E>>(f: F) -> Optional<T> {
        of_fallible(f)
    }

    /// Equivalent to [`of_fallible_async`].
    pub async fn of_fallible_async<E, F: AsyncFnOnce() -> Result<T, E>>(f: F) -> Optional<T> {
        of_fallible_async(f).await
    }
}

fn swallow_panic<T>(payload: Box<dyn Any + Send>) -> Optional<T> {
    match payload_message(&*payload) {
        Some(message) => trace!("callback panicked with \"{message}\", producing None"),
        None => trace!("callback panicked with a non-string payload, producing None"),
    }
    Optional::None
}

fn swallow_err<T, E>(result: Result<T, E>) -> Optional<T> {
    match result {
        Ok(value) => Optional::Some(value),
        Err(_) => {
            trace!("callback returned an error of type {}, producing None", any::type_name::<E>());
            Optional::None
        },
    }
}
