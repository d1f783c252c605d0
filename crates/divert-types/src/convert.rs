// Conversion utilities
// Bridges between the standard library containers and the Divert ones

use crate::opt::Opt::{self, Absent, Present};
use crate::outcome::Outcome::{self, Failure, Success};

impl<T> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Opt<T> {
        match option {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Option<T> {
        match opt {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Result<T, E> {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Opt::from(Some(3)), Present(3));
        assert_eq!(Opt::<i32>::from(None), Absent);
        assert_eq!(Option::from(Present(3)), Some(3));
        assert_eq!(Option::<i32>::from(Opt::Absent), None);
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, String> = Ok(3);
        assert_eq!(Outcome::from(ok), Success(3));
        let err: Result<i32, String> = Err("e".to_string());
        assert_eq!(Outcome::from(err), Failure("e".to_string()));
        let back: Result<i32, String> = Success(3).into();
        assert_eq!(back, Ok(3));
    }
}
