// Public error taxonomy
// Errors that surface past a propagation boundary

use std::any::Any;
use thiserror::Error;

use crate::signal::{SignalKind, UnwrapSignal};

/// Raised (as a panic payload) when a propagated failure cannot be
/// re-expressed as the boundary's declared failure type.
///
/// This always surfaces: it indicates a caller-side type contract
/// violation, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("propagation type mismatch: expected failure type `{expected}`, found `{found}`")]
pub struct MismatchError {
    /// Failure type the boundary promised.
    pub expected: &'static str,
    /// Runtime type actually carried by the signal.
    pub found: &'static str,
}

impl MismatchError {
    /// Create a new mismatch error from the two type names involved.
    pub fn new(expected: &'static str, found: &'static str) -> Self {
        MismatchError { expected, found }
    }
}

/// The message of an asserted (`expect`) failure held in a caught panic
/// payload, if that is what the payload is.
///
/// Useful in an outer handler that wants to report an assertion that
/// escaped every propagation boundary.
pub fn asserted_message(payload: &(dyn Any + Send)) -> Option<&str> {
    match payload.downcast_ref::<UnwrapSignal>() {
        Some(signal) if signal.kind == SignalKind::Asserted => Some(signal.message.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_error_display() {
        let err = MismatchError::new("u32", "alloc::string::String");
        assert_eq!(
            err.to_string(),
            "propagation type mismatch: expected failure type `u32`, found `alloc::string::String`"
        );
    }

    #[test]
    fn test_asserted_message_matches_only_assertions() {
        let asserted: Box<dyn Any + Send> = Box::new(UnwrapSignal::asserted("boom"));
        assert_eq!(asserted_message(&*asserted), Some("boom"));

        let unset: Box<dyn Any + Send> = Box::new(UnwrapSignal::unset("empty"));
        assert_eq!(asserted_message(&*unset), None);

        let foreign: Box<dyn Any + Send> = Box::new("unrelated");
        assert_eq!(asserted_message(&*foreign), None);
    }
}
