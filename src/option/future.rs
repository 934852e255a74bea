use super::Optional;

/// Async twins of the callback-taking combinators. Each one awaits its callback where the
/// synchronous version would call it, and otherwise behaves identically: callbacks are only invoked
/// (and awaited) on the branch that needs them, and a callback future that never resolves leaves
/// the combinator pending.
///
/// Callbacks are [`AsyncFnOnce`], so both `async` closures and plain closures returning a future
/// are accepted.
///
/// # Examples
/// ```
/// # use futures::executor::block_on;
/// # use optionals::{some, none};
/// let doubled = block_on(some(21).map_async(async |v| v * 2));
/// assert_eq!(doubled, some(42));
///
/// let untouched = block_on(none::<i32>().map_async(async |v| v * 2));
/// assert_eq!(untouched, none());
/// ```
impl<T> Optional<T> {
    /// Async version of [`is_some_and`](Optional::is_some_and).
    pub async fn is_some_and_async<F: AsyncFnOnce(T) -> bool>(self, predicate: F) -> bool {
        match self {
            Self::Some(value) => predicate(value).await,
            Self::None => false,
        }
    }

    /// Async version of [`unwrap_or_else`](Optional::unwrap_or_else).
    pub async fn unwrap_or_else_async<F: AsyncFnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f().await,
        }
    }

    /// Async version of [`map`](Optional::map).
    pub async fn map_async<U, F: AsyncFnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => Optional::Some(f(value).await),
            Self::None => Optional::None,
        }
    }

    /// Async version of [`map_nullable`](Optional::map_nullable).
    pub async fn map_nullable_async<U, F: AsyncFnOnce(T) -> Option<U>>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => super::of(f(value).await),
            Self::None => Optional::None,
        }
    }

    /// Async version of [`map_or`](Optional::map_or).
    pub async fn map_or_async<U, F: AsyncFnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => default,
        }
    }

    /// Async version of [`map_or_else`](Optional::map_or_else). Both callbacks are async.
    pub async fn map_or_else_async<U, D, F>(self, default: D, f: F) -> U
    where
        D: AsyncFnOnce() -> U,
        F: AsyncFnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => default().await,
        }
    }

    /// Async version of [`and_then`](Optional::and_then).
    pub async fn and_then_async<U, F: AsyncFnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Optional::None,
        }
    }

    /// Async version of [`flat_map`](Optional::flat_map).
    pub async fn flat_map_async<U, F: AsyncFnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.and_then_async(f).await
    }

    /// Async version of [`filter`](Optional::filter).
    pub async fn filter_async<P: AsyncFnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Some(value) => {
                if predicate(&value).await {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            Self::None => Self::None,
        }
    }

    /// Async version of [`inspect`](Optional::inspect). Resolves to the Optional unchanged once
    /// `f` has completed.
    pub async fn inspect_async<F: AsyncFnOnce(&T)>(self, f: F) -> Self {
        if let Self::Some(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async version of [`or_else`](Optional::or_else).
    pub async fn or_else_async<F: AsyncFnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => f().await,
        }
    }

    /// Async version of [`zip_with`](Optional::zip_with). `f` is only awaited when both Optionals
    /// are `Some`.
    pub async fn zip_with_async<U, V, F>(self, other: Optional<U>, f: F) -> Optional<V>
    where
        F: AsyncFnOnce(T, U) -> V,
    {
        match self.zip(other) {
            Optional::Some((a, b)) => Optional::Some(f(a, b).await),
            Optional::None => Optional::None,
        }
    }

    /// Async version of [`zip_with_nullable`](Optional::zip_with_nullable).
    pub async fn zip_with_nullable_async<U, V, F>(self, other: Optional<U>, f: F) -> Optional<V>
    where
        F: AsyncFnOnce(T, U) -> Option<V>,
    {
        match self.zip(other) {
            Optional::Some((a, b)) => super::of(f(a, b).await),
            Optional::None => Optional::None,
        }
    }

    /// Async version of [`match_with`](Optional::match_with).
    pub async fn match_with_async<U, S, N>(self, if_some: S, if_none: N) -> U
    where
        S: AsyncFnOnce(T) -> U,
        N: AsyncFnOnce() -> U,
    {
        self.map_or_else_async(if_none, if_some).await
    }

    /// Async version of [`equals_by`](Optional::equals_by).
    pub async fn equals_by_async<F: AsyncFnOnce(&T, &T) -> bool>(&self, other: &Self, comparator: F) -> bool {
        match (self, other) {
            (Self::Some(a), Self::Some(b)) => comparator(a, b).await,
            (Self::None, Self::None) => true,
            _ => false,
        }
    }

    /// Async version of [`reduce`](Optional::reduce).
    pub async fn reduce_async<A, F: AsyncFnOnce(A, T) -> A>(self, init: A, f: F) -> A {
        match self {
            Self::Some(value) => f(init, value).await,
            Self::None => init,
        }
    }
}
