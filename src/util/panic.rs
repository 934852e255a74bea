use std::any::Any;

/// Extracts the message from a panic payload, if it was raised with a string (`panic!` with a
/// literal or format string, or `panic_any` with a `String`/`&str`).
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Runs the block, asserting that it panics, and evaluates to the caught payload.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {{
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
        println!("^ panic caught");
        caught.err().unwrap()
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
