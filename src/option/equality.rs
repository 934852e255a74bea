use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use super::Optional;

/// Strict equality, in the sense of JavaScript's `===`: primitive values and strings are compared by
/// value, while shared handles are compared by identity.
///
/// This is the default comparison used by [`Optional::equals`]. Two [`Rc`]s (or [`Arc`]s) are
/// only strictly equal if they point to the same allocation, regardless of their contents.
///
/// Floats follow IEEE comparison, so `NaN` is never strictly equal to itself.
///
/// # Examples
/// ```
/// # use std::rc::Rc;
/// # use optionals::StrictEq;
/// assert!(1_u8.strict_eq(&1));
/// assert!("foo".strict_eq("foo"));
///
/// let a = Rc::new(vec![1, 2]);
/// let b = Rc::new(vec![1, 2]);
/// assert!(a.strict_eq(&a.clone()));
/// assert!(!a.strict_eq(&b));
/// ```
pub trait StrictEq {
    /// Returns true if `self` and `other` are strictly equal.
    fn strict_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_strict_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEq for $ty {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_strict_eq_by_value!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    str, String,
);

impl StrictEq for Cow<'_, str> {
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: StrictEq + ?Sized> StrictEq for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: StrictEq> StrictEq for Optional<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T> Optional<T> {
    /// Compares two Optionals using [`StrictEq`] for the contained values. Two `None`s are equal,
    /// and `None` never equals `Some`.
    ///
    /// Unlike `==`, which compares structurally, this is an identity comparison for shared handles.
    ///
    /// # Examples
    /// ```
    /// # use std::rc::Rc;
    /// # use optionals::{some, none};
    /// assert!(none::<i32>().equals(&none()));
    /// assert!(!some(1).equals(&some(2)));
    /// assert!(!some(1).equals(&none()));
    ///
    /// let shared = Rc::new(String::from("bar"));
    /// assert!(some(shared.clone()).equals(&some(shared)));
    /// assert!(!some(Rc::new(0)).equals(&some(Rc::new(0))));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        T: StrictEq,
    {
        self.equals_by(other, T::strict_eq)
    }

    /// Compares two Optionals using `comparator` for the contained values. The comparator is only
    /// invoked when both are `Some`.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// let same_len = |a: &&str, b: &&str| a.len() == b.len();
    /// assert!(some("foo").equals_by(&some("bar"), same_len));
    /// assert!(!some("foo").equals_by(&none(), |_, _| true));
    /// ```
    pub fn equals_by<F: FnOnce(&T, &T) -> bool>(&self, other: &Self, comparator: F) -> bool {
        match (self, other) {
            (Self::Some(a), Self::Some(b)) => comparator(a, b),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}
