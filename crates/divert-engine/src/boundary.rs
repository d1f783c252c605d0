// Boundary resolution
// Turns a caught unwrap signal back into a typed empty/failure value

use std::any::{type_name, Any};
use std::panic;

use divert_types::signal::{SignalKind, UnwrapSignal};
use divert_types::{Absent, Failure, MismatchError, Opt, Outcome};

/// Payload of a caught unwinding panic.
pub(crate) type Caught = Box<dyn Any + Send + 'static>;

/// Extract the unwrap signal from a caught payload.
///
/// Re-raises everything the boundary does not own: foreign panics pass
/// through untouched, and asserted failures surface with their original
/// payload so outer boundaries re-raise them in turn.
fn take_signal(caught: Caught) -> UnwrapSignal {
    let signal = match caught.downcast::<UnwrapSignal>() {
        Ok(signal) => *signal,
        Err(other) => panic::resume_unwind(other),
    };
    if signal.kind == SignalKind::Asserted {
        tracing::trace!(signal = %signal, "re-raising asserted failure");
        panic::resume_unwind(Box::new(signal));
    }
    signal
}

/// Resolve a caught payload at an optional boundary: any ordinary unwrap
/// signal becomes `Absent`.
pub(crate) fn resolve_opt<T>(caught: Caught) -> Opt<T> {
    let signal = take_signal(caught);
    tracing::trace!(signal = %signal, "absorbed unwrap signal at optional boundary");
    Absent
}

/// Resolve a caught payload at an outcome boundary: repackage the carried
/// failure as the declared failure type, or raise a mismatch.
pub(crate) fn resolve_outcome<T, E: Any>(caught: Caught) -> Outcome<T, E> {
    let mut signal = take_signal(caught);
    let carried = match signal.carried.take() {
        Some(carried) => carried,
        // An optional-origin signal has no failure value to re-express.
        None => mismatch::<E>("Opt::Absent"),
    };
    if carried.from_success {
        // unwrap_failure on a Success is misuse, never a propagation target.
        tracing::trace!(signal = %signal, "re-raising success-origin signal");
        signal.carried = Some(carried);
        panic::resume_unwind(Box::new(signal));
    }
    match carried.value.downcast::<E>() {
        Ok(error) => {
            tracing::trace!(signal = %signal, "repackaged carried failure at outcome boundary");
            Failure(*error)
        }
        Err(_) => mismatch::<E>(carried.type_name),
    }
}

fn mismatch<E>(found: &'static str) -> ! {
    let error = MismatchError::new(type_name::<E>(), found);
    tracing::error!(%error, "propagation type mismatch");
    panic::panic_any(error)
}
