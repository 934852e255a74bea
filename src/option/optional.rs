use std::borrow::Cow;
use std::error::Error;

use derive_more::{Display, IsVariant};

use super::EmptyValueError;
use crate::util::result::ResultExtension;

/// Creates an empty Optional.
///
/// # Examples
/// ```
/// # use optionals::none;
/// assert!(none::<u8>().is_none());
/// ```
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Creates an Optional holding the provided `value`.
///
/// # Examples
/// ```
/// # use optionals::some;
/// assert_eq!(some(3).unwrap(), 3);
/// ```
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates an Optional from a value that may be absent: `None` becomes an empty Optional and
/// `Some(v)` a populated one.
///
/// # Examples
/// ```
/// # use optionals::{of, some, none};
/// assert_eq!(of(Some("a")), some("a"));
/// assert_eq!(of::<&str>(None), none());
/// ```
pub fn of<T>(value: Option<T>) -> Optional<T> {
    match value {
        Some(value) => Optional::Some(value),
        None => Optional::None,
    }
}

/// A value which is either present ([`Some`](Optional::Some)) or absent
/// ([`None`](Optional::None)).
///
/// An Optional is never mutated in place. Every combinator consumes the Optional and produces a
/// new value, so a chain of calls reads as a pipeline:
///
/// ```
/// # use optionals::{of, Optional};
/// fn divide(numerator: f64, denominator: f64) -> Optional<f64> {
///     of((denominator != 0.0).then(|| numerator / denominator))
/// }
///
/// assert_eq!(divide(10.0, 2.0).map(|v| v * 2.0).unwrap_or(0.0), 10.0);
/// assert_eq!(divide(10.0, 0.0).map(|v| v * 2.0).unwrap_or(0.0), 0.0);
/// ```
///
/// Each combinator which accepts a callback has an `async` twin with an `_async` suffix (e.g.
/// [`map_async`](Optional::map_async)) that awaits the callback instead.
///
/// The derived comparison traits compare structurally, with `None` ordered before any `Some`. For
/// JavaScript-style identity comparison, see [`equals`](Optional::equals).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Optional<T> {
    /// No value.
    #[display("None")]
    None,
    /// Exactly one value of type `T`.
    #[display("Some({_0})")]
    Some(T),
}

impl<T> Optional<T> {
    /// Creates an empty Optional. Equivalent to [`none`].
    pub const fn none() -> Optional<T> {
        Optional::None
    }

    /// Creates an Optional holding `value`. Equivalent to [`some`].
    pub const fn some(value: T) -> Optional<T> {
        Optional::Some(value)
    }

    /// Creates an Optional from a value that may be absent. Equivalent to [`of`].
    pub fn of(value: Option<T>) -> Optional<T> {
        of(value)
    }

    /// Returns true if the Optional is `Some` and the value inside of it matches the `predicate`.
    /// The predicate isn't invoked for `None`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert!(some(1).is_some_and(|n| n > 0));
    /// assert!(!some(1).is_some_and(|n| n < 0));
    /// assert!(!none::<i32>().is_some_and(|n| n > 0));
    /// ```
    pub fn is_some_and<F: FnOnce(T) -> bool>(self, predicate: F) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with the message of [`EmptyValueError`], "No value in Option", if the Optional is
    /// `None`. Use [`try_unwrap`](Optional::try_unwrap) to get the error instead.
    ///
    /// # Examples
    /// ```
    /// # use optionals::some;
    /// assert_eq!(some("air").unwrap(), "air");
    /// ```
    /// ```should_panic
    /// # use optionals::none;
    /// none::<u8>().unwrap();
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.try_unwrap().throw()
    }

    /// Returns the contained value, or an [`EmptyValueError`] with the default message.
    pub fn try_unwrap(self) -> Result<T, EmptyValueError> {
        self.ok_or_else(EmptyValueError::new)
    }

    /// Returns the contained value, or panics with the provided `message`.
    ///
    /// # Panics
    /// Panics if the Optional is `None`. To panic with a structured error instead of a message,
    /// see [`expect_err`](Optional::expect_err).
    ///
    /// # Examples
    /// ```should_panic
    /// # use optionals::none;
    /// none::<u8>().expect("the value should be present");
    /// ```
    #[track_caller]
    pub fn expect<M: Into<Cow<'static, str>>>(self, message: M) -> T {
        self.try_expect(message).throw()
    }

    /// Returns the contained value, or an [`EmptyValueError`] carrying the provided `message`.
    pub fn try_expect<M: Into<Cow<'static, str>>>(self, message: M) -> Result<T, EmptyValueError> {
        self.ok_or_else(|| EmptyValueError::with_message(message))
    }

    /// Returns the contained value, or panics with `error` as the panic payload. The error isn't
    /// wrapped, so it can be recovered from the unwind by downcasting to `E`.
    ///
    /// # Panics
    /// Panics if the Optional is `None`.
    ///
    /// # Examples
    /// ```
    /// # use std::panic;
    /// # use optionals::{none, EmptyValueError};
    /// let payload = panic::catch_unwind(|| {
    ///     none::<u8>().expect_err(EmptyValueError::with_message("gone"))
    /// }).unwrap_err();
    ///
    /// let error = payload.downcast::<EmptyValueError>().unwrap();
    /// assert_eq!(error.message(), "gone");
    /// ```
    #[track_caller]
    pub fn expect_err<E: Error + Send + 'static>(self, error: E) -> T {
        self.ok_or(error).throw_verbatim()
    }

    /// Returns the contained value or the provided `default`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(4).unwrap_or(0), 4);
    /// assert_eq!(none().unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one with `f`, which is only invoked for `None`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Returns the contained value or [`T::default()`](Default::default).
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Converts into a standard [`Option`], the closest thing Rust has to a nullable value.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some('x').unwrap_or_null(), Some('x'));
    /// assert_eq!(none::<char>().unwrap_or_null(), None);
    /// ```
    pub fn unwrap_or_null(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// The same as [`unwrap_or_null`](Optional::unwrap_or_null): Rust has only one representation
    /// for an absent value.
    pub fn unwrap_or_undefined(self) -> Option<T> {
        self.unwrap_or_null()
    }

    /// Applies `f` to the contained value, producing a new Optional. `None` is returned unchanged
    /// without invoking `f`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(2).map(|v| v * 10), some(20));
    /// assert_eq!(none::<i32>().map(|v| v * 10), none());
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => Optional::Some(f(value)),
            Self::None => Optional::None,
        }
    }

    /// Like [`map`](Optional::map), but for a mapper whose result may be absent. The result goes
    /// through [`of`], so a mapper returning `None` produces an empty Optional rather than
    /// `Some(None)`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// let lookup = |key: &str| (key == "a").then_some(1);
    /// assert_eq!(some("a").map_nullable(lookup), some(1));
    /// assert_eq!(some("b").map_nullable(lookup), none());
    /// ```
    pub fn map_nullable<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => of(f(value)),
            Self::None => Optional::None,
        }
    }

    /// Returns `f` applied to the contained value, or `default` for `None`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Some(value) => f(value),
            Self::None => default,
        }
    }

    /// Returns `f` applied to the contained value, or the result of `default` for `None`. Only one
    /// of the two callbacks is invoked.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some("abc").map_or_else(|| 0, str::len), 3);
    /// assert_eq!(none::<&str>().map_or_else(|| 0, str::len), 0);
    /// ```
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => default(),
        }
    }

    /// Returns the Optional produced by `f` for the contained value, without re-wrapping it.
    /// `None` is returned without invoking `f`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none, Optional};
    /// fn half(n: u32) -> Optional<u32> {
    ///     if n % 2 == 0 { some(n / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), none());
    /// ```
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Optional::None,
        }
    }

    /// An alias of [`and_then`](Optional::and_then).
    pub fn flat_map<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.and_then(f)
    }

    /// Keeps the contained value only if it matches the `predicate`, otherwise returns `None`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(4).filter(|n| n % 2 == 0), some(4));
    /// assert_eq!(some(3).filter(|n| n % 2 == 0), none());
    /// ```
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            Self::None => Self::None,
        }
    }

    /// Calls `f` with a reference to the contained value, then returns the Optional unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `other` if this Optional is `Some`, otherwise `None`.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Returns this Optional if it is `Some`, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns this Optional if it is `Some`, otherwise the result of `f`.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Returns whichever of the two Optionals is `Some`, if exactly one of them is, otherwise
    /// `None`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(2)), some(2));
    /// assert_eq!(some(1).xor(some(2)), none());
    /// assert_eq!(none::<i32>().xor(none()), none());
    /// ```
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs this value with the value of `other` if both are `Some`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(1).zip(some("one")), some((1, "one")));
    /// assert_eq!(some(1).zip(none::<&str>()), none());
    /// ```
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some((a, b)),
            _ => Optional::None,
        }
    }

    /// Combines this value with the value of `other` using `f`, if both are `Some`.
    pub fn zip_with<U, V, F: FnOnce(T, U) -> V>(self, other: Optional<U>, f: F) -> Optional<V> {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Like [`zip_with`](Optional::zip_with), but `f` may produce an absent value, which becomes
    /// `None`.
    pub fn zip_with_nullable<U, V, F>(self, other: Optional<U>, f: F) -> Optional<V>
    where
        F: FnOnce(T, U) -> Option<V>,
    {
        self.zip(other).map_nullable(|(a, b)| f(a, b))
    }

    /// Returns `if_some` applied to the contained value, or the result of `if_none`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// let describe = |o: optionals::Optional<u8>| o.match_with(|v| format!("got {v}"), || "nothing".into());
    /// assert_eq!(describe(some(7)), "got 7");
    /// assert_eq!(describe(none()), "nothing");
    /// ```
    pub fn match_with<U, S, N>(self, if_some: S, if_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        self.map_or_else(if_none, if_some)
    }

    /// Folds the contained value into `init` using `f`. Returns `init` untouched for `None`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(1).reduce(10, |acc, v| acc + v), 11);
    /// assert_eq!(none().reduce(10, |acc, v: i32| acc + v), 10);
    /// ```
    pub fn reduce<A, F: FnOnce(A, T) -> A>(self, init: A, f: F) -> A {
        match self {
            Self::Some(value) => f(init, value),
            Self::None => init,
        }
    }

    /// Converts into a [`Result`], with `error` used for `None`.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Converts into a [`Result`], with the result of `f` used for `None`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(f()),
        }
    }

    /// Borrows the contained value, producing an `Optional<&T>` without consuming this one.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none, Optional};
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// assert_eq!(none::<Optional<i32>>().flatten(), none());
    /// ```
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Optional::None,
        }
    }
}

impl<A, B> Optional<(A, B)> {
    /// Splits an Optional pair into a pair of Optionals. `None` splits into two `None`s.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(1).zip(some('b')).unzip(), (some(1), some('b')));
    /// assert_eq!(none::<i32>().zip(some('b')).unzip(), (none(), none()));
    /// ```
    pub fn unzip(self) -> (Optional<A>, Optional<B>) {
        match self {
            Self::Some((a, b)) => (Optional::Some(a), Optional::Some(b)),
            Self::None => (Optional::None, Optional::None),
        }
    }
}

impl<A, B> Optional<(Option<A>, Option<B>)> {
    /// Splits an Optional pair of possibly absent values, passing each half through [`of`].
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some((Some(1), None::<char>)).unzip_nullable(), (some(1), none()));
    /// ```
    pub fn unzip_nullable(self) -> (Optional<A>, Optional<B>) {
        match self {
            Self::Some((a, b)) => (of(a), of(b)),
            Self::None => (Optional::None, Optional::None),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.unwrap_or_null()
    }
}

impl<T, E> From<Result<T, E>> for Optional<T> {
    fn from(value: Result<T, E>) -> Self {
        of(value.ok())
    }
}
