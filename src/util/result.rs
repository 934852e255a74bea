use std::error::Error;
use std::panic;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;

    /// Like [`throw`](ResultExtension::throw), but the error becomes the panic payload unchanged,
    /// so that whoever catches the unwind can downcast it back to `E`.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw_verbatim(self) -> T
    where
        E: Send + 'static;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }

    #[track_caller]
    fn throw_verbatim(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Ok(val) => val,
            Err(error) => panic::panic_any(error),
        }
    }
}
