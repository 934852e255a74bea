use std::iter::FusedIterator;
use std::option;

use super::Optional;

/// An owned iterator over the value in an [`Optional`], yielding at most one item.
#[derive(Debug, Clone)]
pub struct IntoIter<T>(option::IntoIter<T>);

/// A borrowed iterator over the value in an [`Optional`], yielding at most one item.
#[derive(Debug, Clone)]
pub struct Iter<'a, T>(option::IntoIter<&'a T>);

impl<T> Optional<T> {
    /// Returns an iterator over a reference to the contained value, if any.
    ///
    /// # Examples
    /// ```
    /// # use optionals::{some, none};
    /// assert_eq!(some(5).iter().sum::<i32>(), 5);
    /// assert_eq!(none::<i32>().iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_ref().unwrap_or_null().into_iter())
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.unwrap_or_null().into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
