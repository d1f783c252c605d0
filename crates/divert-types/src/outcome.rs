//! Success/failure values.
//!
//! [`Outcome`] is the two-variant container for an operation that either
//! produced a [`Success`] value or a [`Failure`] payload. The surface
//! mirrors [`Opt`](crate::Opt) with a second type parameter for the
//! failure side.
//!
//! The extraction operations are the only ones that can raise. An
//! `Outcome`-origin unwrap signal carries the original failure payload so
//! that a propagation boundary can re-express it as a typed `Failure`
//! without fabricating data.

use std::convert;
use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::opt::Opt::{self, Absent, Present};
use crate::signal::{self, UnwrapSignal};

use self::Outcome::{Failure, Success};

/// The result of an operation: a success value or a failure payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The operation succeeded.
    Success(T),
    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    //-------------------------------------------------------------------------
    // Queries
    //-------------------------------------------------------------------------

    /// Returns `true` for `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` for `Failure`.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` for a `Success` whose payload satisfies `predicate`.
    pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => predicate(value),
            Failure(_) => false,
        }
    }

    /// Returns `true` for a `Failure` whose payload satisfies `predicate`.
    pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => predicate(error),
        }
    }

    //-------------------------------------------------------------------------
    // Extraction
    //-------------------------------------------------------------------------

    /// Returns the success value.
    ///
    /// On `Failure`, raises an ordinary unwrap-failure signal carrying the
    /// original failure payload: a propagation boundary re-expresses it as
    /// the producer's `Failure`; outside one this is a panic.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => value,
            Failure(error) => {
                let message =
                    format!("called `Outcome::unwrap()` on a `Failure` value: {error:?}");
                signal::raise(UnwrapSignal::unset(message).carrying(error, false))
            }
        }
    }

    /// Returns the failure payload.
    ///
    /// On `Success`, raises a signal marked as success-origin. Calling
    /// this on a `Success` is a programmer error: no boundary will absorb
    /// the signal, it always surfaces.
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Failure(error) => error,
            Success(value) => {
                let message =
                    format!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}");
                signal::raise(UnwrapSignal::unset(message).carrying(value, true))
            }
        }
    }

    /// Returns the success value, raising an *asserted* failure with
    /// `message` on `Failure`. Asserted failures always surface.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => signal::raise(UnwrapSignal::asserted(format!("{message}: {error:?}"))),
        }
    }

    /// Returns the failure payload, raising an *asserted* failure with
    /// `message` on `Success`.
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Failure(error) => error,
            Success(value) => signal::raise(UnwrapSignal::asserted(format!("{message}: {value:?}"))),
        }
    }

    /// Returns the success value, or `default` on `Failure`. Never raises.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success value, or `T::default()`. Never raises.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    //-------------------------------------------------------------------------
    // Transformation
    //-------------------------------------------------------------------------

    /// Maps the success value with `f`, passing a `Failure` through
    /// unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the failure payload with `f`, passing a `Success` through
    /// unchanged.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Calls `f` with the success value, if any, and returns self unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Outcome<T, E> {
        if let Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with the failure payload, if any, and returns self
    /// unchanged.
    pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Outcome<T, E> {
        if let Failure(ref error) = self {
            f(error);
        }
        self
    }

    //-------------------------------------------------------------------------
    // Combination
    //-------------------------------------------------------------------------

    /// Returns `other` on `Success`; a `Failure` short-circuits, its
    /// payload passing through unchanged.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Chains a derivation that may itself fail; a `Failure` short-circuits
    /// with its original payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns self on `Success`, otherwise `other`.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Returns self on `Success`, otherwise derives a fallback from the
    /// failure payload.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    //-------------------------------------------------------------------------
    // Conversion
    //-------------------------------------------------------------------------

    /// `Success` becomes `Present`, discarding any failure payload.
    pub fn success(self) -> Opt<T> {
        match self {
            Success(value) => Present(value),
            Failure(_) => Absent,
        }
    }

    /// `Failure` becomes `Present`, discarding any success value.
    pub fn failure(self) -> Opt<E> {
        match self {
            Success(_) => Absent,
            Failure(error) => Present(error),
        }
    }

    //-------------------------------------------------------------------------
    // Borrowing support
    //-------------------------------------------------------------------------

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Iterates over the success value: one element for `Success`, none
    /// for `Failure`. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().success(),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses one level of nesting with a matching failure type.
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(convert::identity)
    }
}

impl<T, E> Outcome<Opt<T>, E> {
    /// Swaps the outer `Outcome` with an inner `Opt`.
    pub fn transpose(self) -> Opt<Outcome<T, E>> {
        match self {
            Success(Present(value)) => Present(Success(value)),
            Success(Absent) => Absent,
            Failure(error) => Present(Failure(error)),
        }
    }
}

//-----------------------------------------------------------------------------
// Iterators
//-----------------------------------------------------------------------------

/// Borrowing iterator over at most one success value. See
/// [`Outcome::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Opt<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_present() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator over at most one success value.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Opt<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_present() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.success(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    type Res = Outcome<i32, String>;

    fn fail(msg: &str) -> Res {
        Failure(msg.to_string())
    }

    #[test]
    fn test_unwrap_success() {
        assert_eq!(Res::Success(3).unwrap(), 3);
        assert_eq!(Res::Success(3).expect("must succeed"), 3);
        assert_eq!(fail("oops").unwrap_failure(), "oops");
    }

    #[test]
    #[should_panic]
    fn test_unwrap_failure_variant_raises() {
        fail("oops").unwrap();
    }

    #[test]
    #[should_panic]
    fn test_unwrap_failure_on_success_raises() {
        Res::Success(3).unwrap_failure();
    }

    #[test]
    fn test_unwrap_fallbacks_never_raise() {
        assert_eq!(fail("oops").unwrap_or(7), 7);
        assert_eq!(fail("oops").unwrap_or_else(|e| e.len() as i32), 4);
        assert_eq!(fail("oops").unwrap_or_default(), 0);
        assert_eq!(Res::Success(1).unwrap_or(7), 1);
    }

    #[test]
    fn test_queries() {
        assert!(Res::Success(1).is_success());
        assert!(fail("e").is_failure());
        assert!(Res::Success(4).is_success_and(|n| n % 2 == 0));
        assert!(!fail("e").is_success_and(|_| true));
        assert!(fail("long message").is_failure_and(|e| e.len() > 4));
        assert!(!Res::Success(1).is_failure_and(|_| true));
    }

    #[test]
    fn test_map_sides_are_independent() {
        assert_eq!(Res::Success(2).map(|n| n * 10), Success(20));
        assert_eq!(fail("e").map(|n| n * 10), fail("e"));
        assert_eq!(
            fail("e").map_failure(|e| format!("{e}!")),
            Failure("e!".to_string())
        );
        assert_eq!(Res::Success(2).map_failure(|e| format!("{e}!")), Success(2));
    }

    #[test]
    fn test_inspect_sides() {
        let mut seen = Vec::new();
        Res::Success(1).inspect(|n| seen.push(*n));
        fail("e").inspect(|n| seen.push(*n));
        assert_eq!(seen, vec![1]);

        let mut errors = Vec::new();
        fail("e").inspect_failure(|e| errors.push(e.clone()));
        Res::Success(1).inspect_failure(|e| errors.push(e.clone()));
        assert_eq!(errors, vec!["e".to_string()]);
    }

    #[test]
    fn test_and_preserves_original_failure() {
        let failed = fail("original");
        assert_eq!(failed.clone().and(Res::Success(9)), fail("original"));
        assert_eq!(
            failed.and_then(|n| Res::Success(n + 1)),
            fail("original")
        );
        assert_eq!(Res::Success(1).and(Res::Success(9)), Success(9));
        assert_eq!(Res::Success(1).and_then(|n| Res::Success(n + 1)), Success(2));
    }

    #[test]
    fn test_or_short_circuits_on_success() {
        assert_eq!(Res::Success(1).or(fail("later")), Success(1));
        assert_eq!(fail("e").or(Res::Success(2)), Success(2));
        assert_eq!(
            fail("e").or_else(|e| Res::Failure(format!("{e}?"))),
            Failure("e?".to_string())
        );
    }

    #[test]
    fn test_optional_conversions() {
        assert_eq!(Res::Success(3).success(), Present(3));
        assert_eq!(fail("e").success(), Absent);
        assert_eq!(fail("e").failure(), Present("e".to_string()));
        assert_eq!(Res::Success(3).failure(), Absent);
    }

    #[test]
    fn test_transpose_is_self_inverse() {
        let success_present: Outcome<Opt<i32>, &str> = Success(Present(3));
        assert_eq!(success_present.transpose(), Present(Success(3)));
        assert_eq!(
            success_present.transpose().transpose(),
            success_present
        );

        let success_absent: Outcome<Opt<i32>, &str> = Success(Absent);
        assert_eq!(success_absent.transpose(), Absent);

        let failure: Outcome<Opt<i32>, &str> = Failure("e");
        assert_eq!(failure.transpose(), Present(Failure("e")));
    }

    #[test]
    fn test_flatten() {
        let nested: Outcome<Outcome<i32, String>, String> = Success(Success(3));
        assert_eq!(nested.flatten(), Success(3));
        let inner_failure: Outcome<Outcome<i32, String>, String> =
            Success(Failure("inner".to_string()));
        assert_eq!(inner_failure.flatten(), fail("inner"));
        let outer_failure: Outcome<Outcome<i32, String>, String> =
            Failure("outer".to_string());
        assert_eq!(outer_failure.flatten(), fail("outer"));
    }

    #[test]
    fn test_iter_yields_success_only() {
        let success = Res::Success(7);
        assert_eq!(success.iter().count(), 1);
        assert_eq!(success.iter().next(), Some(&7));
        assert_eq!(fail("e").iter().count(), 0);
        assert_eq!(success.into_iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_equality_and_hash_contract() {
        assert_eq!(Res::Success(1), Success(1));
        assert_eq!(fail("e"), fail("e"));
        assert_ne!(Res::Success(1), fail("e"));

        let mut keys = HashSet::new();
        keys.insert(Res::Success(1));
        keys.insert(Res::Success(1));
        keys.insert(fail("e"));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let success: Res = Success(3);
        let json = serde_json::to_string(&success).unwrap();
        assert_eq!(serde_json::from_str::<Res>(&json).unwrap(), success);

        let failure = fail("oops");
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(serde_json::from_str::<Res>(&json).unwrap(), failure);
    }
}
