//! This crate provides [`Optional`], a value that is either present (`Some`) or absent (`None`),
//! with a fluent set of combinators for working on the value without unwrapping it by hand.
//!
//! # Purpose
//! Rust already has [`Option`], so this isn't about avoiding null. The goal is a container whose
//! combinators come in matching synchronous and asynchronous pairs, with identity-based equality
//! and serialization that treats an empty value as absent. It sticks close to the names and
//! semantics of [`Option`] where the two overlap.
//!
//! # Method
//! [`Optional`] is a closed enum, so behaviour for each variant is a `match` away rather than split
//! across separate types. Nothing mutates an Optional: every combinator takes it by value and hands
//! back a new one.
//!
//! ```
//! use optionals::{of, some};
//!
//! let total = of("12".parse::<u32>().ok())
//!     .filter(|n| *n > 10)
//!     .zip_with(some(3), |a, b| a * b)
//!     .unwrap_or(0);
//! assert_eq!(total, 36);
//! ```
//!
//! # Async
//! There is no way to ask a Rust closure whether it returned a future, so instead of one method
//! that changes shape at runtime, each callback-taking combinator has an `async fn` twin with an
//! `_async` suffix. They accept [`AsyncFnOnce`] callbacks, which includes both `async` closures and
//! plain closures returning futures.
//!
//! ```
//! # use futures::executor::block_on;
//! use optionals::some;
//!
//! let value = block_on(async {
//!     some(1).map_async(async |v| v + 1).await
//! });
//! assert_eq!(value, some(2));
//! ```
//!
//! # Error Handling
//! Like the standard library, asking for a value that isn't there panics by default
//! ([`unwrap`](Optional::unwrap), [`expect`](Optional::expect)), with `try_` variants returning an
//! [`EmptyValueError`] instead. Panics raised by callbacks are never caught by combinators, with
//! the exception of [`of_throwable`] and [`of_fallible`], which exist to turn them into `None`.
//!
//! # Features
//! - `serde` (default): [`Serialize`](serde::Serialize) and [`Deserialize`](serde::Deserialize)
//!   for [`Optional`].

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod option;

pub(crate) mod util;

pub use option::*;
