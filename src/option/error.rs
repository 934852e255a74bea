use std::borrow::Cow;

use derive_more::{Display, Error};

/// The message used by [`Optional::unwrap`](super::Optional::unwrap) when there is no value.
pub const EMPTY_VALUE_MESSAGE: &str = "No value in Option";

/// The error produced when a value is demanded from an empty [`Optional`](super::Optional).
///
/// # Examples
/// ```
/// # use optionals::{none, EmptyValueError};
/// let err = none::<u8>().try_unwrap().unwrap_err();
/// assert_eq!(err.to_string(), "No value in Option");
///
/// let err = none::<u8>().try_expect("config missing").unwrap_err();
/// assert_eq!(err, EmptyValueError::with_message("config missing"));
/// ```
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{message}")]
pub struct EmptyValueError {
    message: Cow<'static, str>,
}

impl EmptyValueError {
    /// Creates an EmptyValueError with the default message, "No value in Option".
    pub const fn new() -> EmptyValueError {
        EmptyValueError {
            message: Cow::Borrowed(EMPTY_VALUE_MESSAGE),
        }
    }

    /// Creates an EmptyValueError with a caller-supplied message.
    pub fn with_message<M: Into<Cow<'static, str>>>(message: M) -> EmptyValueError {
        EmptyValueError {
            message: message.into(),
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for EmptyValueError {
    fn default() -> Self {
        EmptyValueError::new()
    }
}
