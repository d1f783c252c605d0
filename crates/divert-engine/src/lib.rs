// Divert propagation engine
// Catch boundaries that convert escaped unwrap signals into typed
// empty/failure results
//
// A propagation call runs a producer and resolves it deterministically:
// normal return passes through, an ordinary unwrap failure short-circuits
// to `Absent`/the original `Failure`, and everything else (asserted
// failures, failure-from-success misuse, type mismatches, unrelated
// panics) is re-raised to the enclosing scope. Nested calls are
// independent: each establishes its own boundary.
//
// The boundaries are built on unwinding; the engine does not work with
// `panic = "abort"`.

// Re-export modules
mod boundary;
mod run;

pub use run::{run_opt, run_opt_async, run_outcome, run_outcome_async};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
