// Unwrap-failure signaling
// Internal control-flow signal resolved by the propagation engine

use std::any::{self, Any};
use std::fmt;
use std::panic;

/// How an unwrap raised: an ordinary access of an empty/failure container,
/// or an explicit assertion (`expect`) with a caller message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Ordinary `unwrap` of an `Absent` or wrong-variant container.
    Unset,
    /// `expect`/`expect_failure` with a caller-supplied message. Never
    /// absorbed by a boundary.
    Asserted,
}

/// Payload carried by an `Outcome`-origin signal across the boundary.
pub struct Carried {
    /// Set when the signal came from `unwrap_failure` on a `Success`.
    /// A boundary must re-raise such a signal rather than repackage it.
    pub from_success: bool,
    /// The original payload, boxed for transport.
    pub value: Box<dyn Any + Send>,
    /// Runtime type name of `value`, for mismatch diagnostics.
    pub type_name: &'static str,
}

impl fmt::Debug for Carried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carried")
            .field("from_success", &self.from_success)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// The unwrap-failure signal.
///
/// Raised with [`panic::panic_any`] by the extraction operations and
/// resolved by the nearest propagation boundary. Carries only immutable
/// data and is consumed where it is caught; it must not be retained past
/// the boundary that resolves it.
#[derive(Debug)]
pub struct UnwrapSignal {
    pub kind: SignalKind,
    pub message: String,
    pub carried: Option<Carried>,
}

impl UnwrapSignal {
    /// An ordinary empty/failure access.
    pub fn unset(message: impl Into<String>) -> Self {
        UnwrapSignal {
            kind: SignalKind::Unset,
            message: message.into(),
            carried: None,
        }
    }

    /// An explicit assertion failure with a caller message.
    pub fn asserted(message: impl Into<String>) -> Self {
        UnwrapSignal {
            kind: SignalKind::Asserted,
            message: message.into(),
            carried: None,
        }
    }

    /// Attach the original payload of a failed `Outcome` access.
    pub fn carrying<P: Any + Send>(mut self, value: P, from_success: bool) -> Self {
        self.carried = Some(Carried {
            from_success,
            value: Box::new(value),
            type_name: any::type_name::<P>(),
        });
        self
    }
}

impl fmt::Display for UnwrapSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Raise `signal` to the nearest propagation boundary.
#[track_caller]
pub fn raise(signal: UnwrapSignal) -> ! {
    panic::panic_any(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_signal_has_no_payload() {
        let signal = UnwrapSignal::unset("empty access");
        assert_eq!(signal.kind, SignalKind::Unset);
        assert_eq!(signal.message, "empty access");
        assert!(signal.carried.is_none());
    }

    #[test]
    fn test_carrying_records_type_name() {
        let signal = UnwrapSignal::unset("failed").carrying("oops".to_string(), false);
        let carried = signal.carried.expect("payload attached");
        assert!(!carried.from_success);
        assert_eq!(carried.type_name, any::type_name::<String>());
        let value = carried.value.downcast::<String>().expect("string payload");
        assert_eq!(*value, "oops");
    }

    #[test]
    fn test_raise_is_catchable_as_signal() {
        let caught = panic::catch_unwind(|| {
            raise(UnwrapSignal::asserted("boom"));
        })
        .expect_err("raise must unwind");
        let signal = caught.downcast::<UnwrapSignal>().expect("signal payload");
        assert_eq!(signal.kind, SignalKind::Asserted);
        assert_eq!(signal.message, "boom");
    }
}
