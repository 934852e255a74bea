#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::panic::AssertUnwindSafe;

use futures::future::{self, FutureExt};

use super::*;
use crate::util::panic::payload_message;
use crate::util::track::CallCount;

#[tokio::test]
async fn test_map_async() {
    assert_eq!(some(1).map_async(async |v| v + 1).await, some(2));
    assert_eq!(
        some(1).map_async(|v: i32| future::ready(v + 1)).await,
        some(2),
        "A plain closure returning a future should be accepted too."
    );

    let calls = CallCount::default();
    assert_eq!(none::<i32>().map_async(async |v| { calls.hit(); v }).await, none());
    assert_eq!(calls.get(), 0, "The mapper shouldn't be invoked for None.");
}

#[test]
fn test_pending_callback() {
    let pending = some(1).map_async(async |_| future::pending::<i32>().await);
    assert!(
        pending.now_or_never().is_none(),
        "A callback that never resolves should leave the combinator pending."
    );

    let skipped = none::<i32>().map_async(async |_| future::pending::<i32>().await);
    assert_eq!(
        skipped.now_or_never(),
        Some(none()),
        "None shouldn't wait on a callback it never invokes."
    );
}

#[tokio::test]
async fn test_predicates_async() {
    assert_eq!(some(4).filter_async(async |v| *v % 2 == 0).await, some(4));
    assert_eq!(some(3).filter_async(async |v| *v % 2 == 0).await, none());
    assert_eq!(none::<i32>().filter_async(async |_| true).await, none());

    assert!(some(1).is_some_and_async(async |v| v > 0).await);
    assert!(!some(1).is_some_and_async(async |v| v < 0).await);
    assert!(!none::<i32>().is_some_and_async(async |_| true).await);
}

#[tokio::test]
async fn test_inspect_async() {
    let seen = Cell::new(0);
    let result = some(7).inspect_async(async |v| seen.set(*v)).await;
    assert_eq!(result, some(7), "inspect_async should resolve to the Optional unchanged.");
    assert_eq!(seen.get(), 7);

    let result = none::<i32>().inspect_async(async |_| seen.set(-1)).await;
    assert_eq!(result, none());
    assert_eq!(seen.get(), 7, "inspect_async shouldn't invoke the callback for None.");
}

#[tokio::test]
async fn test_fallbacks_async() {
    assert_eq!(some(1).unwrap_or_else_async(async || 0).await, 1);
    assert_eq!(none().unwrap_or_else_async(async || 0).await, 0);

    assert_eq!(some(1).or_else_async(async || some(2)).await, some(1));
    assert_eq!(none().or_else_async(async || some(2)).await, some(2));

    assert_eq!(some(2).map_or_async(0, async |v| v + 1).await, 3);
    assert_eq!(none::<i32>().map_or_async(0, async |v| v + 1).await, 0);

    assert_eq!(some(2).map_or_else_async(async || 42, async |v| v + 1).await, 3);
    assert_eq!(none::<i32>().map_or_else_async(async || 42, async |v| v + 1).await, 42);
}

#[tokio::test]
async fn test_and_then_async() {
    async fn halve(n: u32) -> Optional<u32> {
        if n % 2 == 0 { some(n / 2) } else { none() }
    }

    assert_eq!(some(8).and_then_async(halve).await, some(4));
    assert_eq!(some(7).and_then_async(halve).await, none());
    assert_eq!(none().and_then_async(halve).await, none());
    assert_eq!(some(6).flat_map_async(halve).await, some(3));
}

#[tokio::test]
async fn test_zip_with_async() {
    assert_eq!(some(1).zip_with_async(some(2), async |a, b| a + b).await, some(3));
    assert_eq!(none::<i32>().zip_with_async(some(2), async |a, b| a + b).await, none());
    assert_eq!(some(1).zip_with_async(none::<i32>(), async |a, b| a + b).await, none());
}

#[tokio::test]
async fn test_nullable_results_async() {
    let mapped = some("foo")
        .map_nullable_async(async |v| { if v == "foo" { None } else { Some(v) } })
        .await;
    assert!(mapped.is_none(), "A mapper resolving to None should produce None.");
    assert_eq!(some(1).map_nullable_async(async |v| Some(v + 1)).await, some(2));

    let calls = CallCount::default();
    assert_eq!(none::<i32>().map_nullable_async(async |v| { calls.hit(); Some(v) }).await, none());
    assert_eq!(calls.get(), 0, "The mapper shouldn't be invoked for None.");

    assert_eq!(some(1).zip_with_nullable_async(some(2), async |_, _| None::<i32>).await, none());
    assert_eq!(some(1).zip_with_nullable_async(some(2), async |a, b| Some(a + b)).await, some(3));
    assert_eq!(
        some(1).zip_with_nullable_async(none::<i32>(), async |a, b| Some(a + b)).await,
        none()
    );
}

#[tokio::test]
async fn test_match_with_and_reduce_async() {
    assert_eq!(some(2).match_with_async(async |v| v * 10, async || 0).await, 20);
    assert_eq!(none::<i32>().match_with_async(async |v| v * 10, async || -1).await, -1);

    assert_eq!(some(1).reduce_async(0, async |acc, v| acc + v).await, 1);
    assert_eq!(none::<i32>().reduce_async(0, async |acc, v| acc + v).await, 0);
}

#[tokio::test]
async fn test_equals_by_async() {
    assert!(none::<i32>().equals_by_async(&none(), async |a, b| a == b).await);
    assert!(!none().equals_by_async(&some(1), async |a, b| a == b).await);
    assert!(some(1).equals_by_async(&some(1), async |a, b| a == b).await);
    assert!(!some(1).equals_by_async(&some(2), async |a, b| a == b).await);
    assert!(
        !some(1).equals_by_async(&none(), async |_, _| true).await,
        "The comparator isn't used against None."
    );
}

#[tokio::test]
async fn test_of_throwable_async() {
    assert_eq!(of_throwable_async(async || "foo").await, some("foo"));
    assert_eq!(
        of_throwable_async(async || -> u8 { panic!("foo") }).await,
        none(),
        "A panic while polling should become None."
    );
    assert_eq!(
        of_throwable_async(async || -> u8 { std::panic::panic_any(17_u32) }).await,
        none(),
        "A panic with a payload that isn't a message should still become None."
    );
    assert_eq!(
        of_throwable_async(|| -> future::Ready<u8> { panic!("before the future") }).await,
        none(),
        "A panic while producing the future should become None."
    );
    assert_eq!(Optional::of_throwable_async(async || 1).await, some(1));
}

#[tokio::test]
async fn test_of_fallible_async() {
    assert_eq!(of_fallible_async(async || "3".parse::<u8>()).await, some(3));
    assert_eq!(of_fallible_async(async || "three".parse::<u8>()).await, none());
    assert_eq!(Optional::of_fallible_async(async || Ok::<_, ()>(1)).await, some(1));
}

#[tokio::test]
async fn test_callback_panics_propagate_async() {
    let caught = AssertUnwindSafe(some(1).map_async(async |_: i32| -> i32 { panic!("mapper") }))
        .catch_unwind()
        .await;
    let payload = caught.expect_err("map_async shouldn't catch panics from its callback");
    assert_eq!(payload_message(&*payload), Some("mapper"));
}

#[tokio::test]
async fn test_sequential_order() {
    let log = RefCell::new(Vec::new());

    let result = some(1)
        .map_async(async |v| { log.borrow_mut().push("map"); v + 1 })
        .await
        .filter_async(async |v| { log.borrow_mut().push("filter"); *v > 1 })
        .await
        .inspect_async(async |_| log.borrow_mut().push("inspect"))
        .await;

    assert_eq!(result, some(2));
    assert_eq!(
        *log.borrow(),
        ["map", "filter", "inspect"],
        "Chained combinators should resolve in call order."
    );
}
