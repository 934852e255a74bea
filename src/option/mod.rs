//! A module containing [`Optional`] and associated types.
//!
//! An [`Optional`] is built with one of the constructor functions:
//! - [`none`] and [`some`] create each variant directly.
//! - [`of`] converts from a standard [`Option`], which is how Rust represents a nullable value.
//! - [`of_throwable`] and [`of_fallible`] (and their `_async` variants) run a callback and turn a
//!   panic or error into `None`.
//!
//! Every combinator that takes a callback has an `async` twin suffixed with `_async`, rather than
//! a single method that switches behaviour depending on what the callback returns.
//!
//! Other types here are the [`EmptyValueError`] used when unwrapping an empty Optional, the
//! [`StrictEq`] trait backing [`Optional::equals`], and iterators.

mod equality;
mod error;
mod future;
mod iter;
mod optional;
mod serialize;
mod throwable;

mod async_tests;

pub use equality::*;
pub use error::*;
pub use iter::*;
pub use optional::*;
pub use throwable::*;
