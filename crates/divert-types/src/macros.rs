// Container macros
// Early-return shorthands for functions that themselves return a container

/// Unwrap an `Opt`, returning `Absent` from the enclosing function if it
/// is empty
#[macro_export]
macro_rules! try_present {
    ($expr:expr) => {
        match $expr {
            $crate::Opt::Present(value) => value,
            $crate::Opt::Absent => return $crate::Opt::Absent,
        }
    };
}

/// Unwrap an `Outcome`, returning the original `Failure` unchanged from
/// the enclosing function if it failed
#[macro_export]
macro_rules! try_success {
    ($expr:expr) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::Outcome::Failure(error),
        }
    };
}

/// Return early with a `Failure` if a condition is not satisfied
#[macro_export]
macro_rules! ensure_success {
    ($cond:expr, $error:expr) => {
        if !($cond) {
            return $crate::Outcome::Failure($error);
        }
    };
}

/// Bail early with a `Failure`
#[macro_export]
macro_rules! bail_failure {
    ($error:expr) => {
        return $crate::Outcome::Failure($error)
    };
}

/// Convert an `Outcome` to an `Opt`, logging the failure if it exists
#[macro_export]
macro_rules! success_or_log {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => $crate::Opt::Present(value),
            $crate::Outcome::Failure(error) => {
                tracing::error!("Failure: {:?}", error);
                $crate::Opt::Absent
            }
        }
    };
    ($outcome:expr, $message:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => $crate::Opt::Present(value),
            $crate::Outcome::Failure(error) => {
                tracing::error!("{}: {:?}", $message, error);
                $crate::Opt::Absent
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Absent, Failure, Opt, Outcome, Present, Success};

    fn first_even(values: &[i32]) -> Opt<i32> {
        let found = values.iter().copied().find(|n| n % 2 == 0);
        let value = try_present!(Opt::from(found));
        Present(value * 10)
    }

    fn checked_div(a: i32, b: i32) -> Outcome<i32, String> {
        ensure_success!(b != 0, "division by zero".to_string());
        Success(a / b)
    }

    fn double_div(a: i32, b: i32) -> Outcome<i32, String> {
        let once = try_success!(checked_div(a, b));
        let twice = try_success!(checked_div(once, b));
        Success(twice)
    }

    fn reject(reason: &str) -> Outcome<i32, String> {
        bail_failure!(reason.to_string());
    }

    #[test]
    fn test_try_present_short_circuits() {
        assert_eq!(first_even(&[1, 3, 4]), Present(40));
        assert_eq!(first_even(&[1, 3, 5]), Absent);
    }

    #[test]
    fn test_try_success_preserves_failure() {
        assert_eq!(double_div(8, 2), Success(2));
        assert_eq!(double_div(8, 0), Failure("division by zero".to_string()));
    }

    #[test]
    fn test_ensure_and_bail() {
        assert_eq!(checked_div(9, 3), Success(3));
        assert_eq!(checked_div(9, 0), Failure("division by zero".to_string()));
        assert_eq!(reject("nope"), Failure("nope".to_string()));
    }

    #[test]
    fn test_success_or_log() {
        let ok: Outcome<i32, String> = Success(3);
        assert_eq!(success_or_log!(ok), Present(3));
        let failed: Outcome<i32, String> = Failure("oops".to_string());
        assert_eq!(success_or_log!(failed), Absent);
        let failed: Outcome<i32, String> = Failure("oops".to_string());
        assert_eq!(success_or_log!(failed, "lookup failed"), Absent);
    }
}
