// Propagation drivers
// Run a producer inside a catch boundary and resolve escaped unwrap signals

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use divert_types::{Opt, Outcome};

use crate::boundary;

/// Run `producer`, short-circuiting to `Absent` on the first ordinary
/// unwrap failure inside it.
///
/// The producer may `unwrap()` any number of containers; the first empty
/// access aborts the rest of the block and resolves the whole call to
/// `Absent`. Asserted (`expect`) failures and panics unrelated to
/// unwrapping pass through to the caller unchanged.
pub fn run_opt<T, F>(producer: F) -> Opt<T>
where
    F: FnOnce() -> Opt<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(value) => value,
        Err(caught) => boundary::resolve_opt(caught),
    }
}

/// Run `producer`, short-circuiting to the original `Failure` on the
/// first ordinary unwrap failure inside it.
///
/// The failure payload carried by the signal is re-expressed as the
/// producer's declared failure type `E`. If the payload's runtime type is
/// not `E`, the call raises a [`MismatchError`](divert_types::MismatchError)
/// rather than fabricating a result. Asserted failures,
/// `unwrap_failure`-on-`Success` misuse, and unrelated panics pass
/// through to the caller unchanged.
pub fn run_outcome<T, E, F>(producer: F) -> Outcome<T, E>
where
    E: Any,
    F: FnOnce() -> Outcome<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(value) => value,
        Err(caught) => boundary::resolve_outcome(caught),
    }
}

/// Asynchronous form of [`run_opt`]: the boundary covers both the
/// producer call and every poll of the future it returns.
pub async fn run_opt_async<T, F, Fut>(producer: F) -> Opt<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Opt<T>>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(future) => future,
        Err(caught) => return boundary::resolve_opt(caught),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => value,
        Err(caught) => boundary::resolve_opt(caught),
    }
}

/// Asynchronous form of [`run_outcome`]: the boundary covers both the
/// producer call and every poll of the future it returns.
pub async fn run_outcome_async<T, E, F, Fut>(producer: F) -> Outcome<T, E>
where
    E: Any,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(future) => future,
        Err(caught) => return boundary::resolve_outcome(caught),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => value,
        Err(caught) => boundary::resolve_outcome(caught),
    }
}
