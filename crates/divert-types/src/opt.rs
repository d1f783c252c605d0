//! Optional values.
//!
//! [`Opt`] is a closed two-variant container: [`Present`] holds a value,
//! [`Absent`] holds nothing. Presence is structural, not based on the
//! payload's content: `Present` may hold any value of `T`, including one
//! that is itself "empty" in some nested sense.
//!
//! Only [`Opt::unwrap`] and [`Opt::expect`] can raise; every other
//! operation is total. Raises are resolved by a propagation boundary in
//! `divert-engine`, or surface as ordinary panics without one.

use std::convert;
use std::iter::FusedIterator;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome::{self, Failure, Success};
use crate::signal::{self, UnwrapSignal};

use self::Opt::{Absent, Present};

/// A value that may or may not be there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opt<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Opt<T> {
    //-------------------------------------------------------------------------
    // Presence queries
    //-------------------------------------------------------------------------

    /// Returns `true` if the value is `Present`.
    pub const fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    /// Returns `true` if the value is `Absent`.
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns `true` if the value is `Present` and the payload satisfies
    /// `predicate`.
    pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    //-------------------------------------------------------------------------
    // Extraction
    //-------------------------------------------------------------------------

    /// Returns the contained value.
    ///
    /// On `Absent`, raises an ordinary unwrap-failure signal: inside a
    /// propagation boundary the enclosing producer short-circuits to
    /// `Absent`; outside one this is a panic.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Absent => signal::raise(UnwrapSignal::unset(
                "called `Opt::unwrap()` on an `Absent` value",
            )),
        }
    }

    /// Returns the contained value.
    ///
    /// On `Absent`, raises an *asserted* failure with `message`. Asserted
    /// failures are never absorbed by a propagation boundary; the message
    /// always surfaces.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Present(value) => value,
            Absent => signal::raise(UnwrapSignal::asserted(message)),
        }
    }

    /// Returns the contained value, or `default` on `Absent`. Never raises.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// Returns the contained value, or computes one from `f`. Never raises.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }

    /// Returns the contained value, or `T::default()`. Never raises.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    //-------------------------------------------------------------------------
    // Transformation
    //-------------------------------------------------------------------------

    /// Maps the contained value with `f`, leaving `Absent` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Opt<T> {
        match self {
            Present(value) if predicate(&value) => Present(value),
            _ => Absent,
        }
    }

    /// Calls `f` with the contained value, if any, and returns self
    /// unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Opt<T> {
        if let Present(ref value) = self {
            f(value);
        }
        self
    }

    //-------------------------------------------------------------------------
    // Combination
    //-------------------------------------------------------------------------

    /// Returns `other` if self is `Present`, otherwise `Absent`.
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }

    /// Chains a derivation that may itself come up empty.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Returns self if `Present`, otherwise `other`.
    pub fn or(self, other: Opt<T>) -> Opt<T> {
        match self {
            Present(value) => Present(value),
            Absent => other,
        }
    }

    /// Returns self if `Present`, otherwise computes a fallback.
    pub fn or_else(self, f: impl FnOnce() -> Opt<T>) -> Opt<T> {
        match self {
            Present(value) => Present(value),
            Absent => f(),
        }
    }

    /// Present iff exactly one of self and `other` is present.
    pub fn xor(self, other: Opt<T>) -> Opt<T> {
        match (self, other) {
            (Present(value), Absent) => Present(value),
            (Absent, Present(value)) => Present(value),
            _ => Absent,
        }
    }

    /// Pairs two present values; `Absent` if either side is absent.
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines two present values with `f`; `Absent` if either side is
    /// absent.
    pub fn zip_with<U, R>(self, other: Opt<U>, f: impl FnOnce(T, U) -> R) -> Opt<R> {
        match (self, other) {
            (Present(a), Present(b)) => Present(f(a, b)),
            _ => Absent,
        }
    }

    //-------------------------------------------------------------------------
    // Conversion
    //-------------------------------------------------------------------------

    /// `Present` becomes `Success`; `Absent` becomes `Failure(error)`.
    pub fn success_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Present(value) => Success(value),
            Absent => Failure(error),
        }
    }

    /// `Present` becomes `Success`; `Absent` becomes a failure computed by
    /// `f`.
    pub fn success_or_else<E>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Present(value) => Success(value),
            Absent => Failure(f()),
        }
    }

    //-------------------------------------------------------------------------
    // Borrowing and in-place support
    //-------------------------------------------------------------------------

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Takes the value out, leaving `Absent` behind.
    pub fn take(&mut self) -> Opt<T> {
        mem::replace(self, Absent)
    }

    /// Replaces the contained state with `Present(value)`, returning the
    /// previous state.
    pub fn replace(&mut self, value: T) -> Opt<T> {
        mem::replace(self, Present(value))
    }

    /// Iterates over the contained value: one element for `Present`, none
    /// for `Absent`. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }
}

impl<T, U> Opt<(T, U)> {
    /// Splits a paired payload into a pair of containers. Inverse of
    /// [`Opt::zip`].
    pub fn unzip(self) -> (Opt<T>, Opt<U>) {
        match self {
            Present((a, b)) => (Present(a), Present(b)),
            Absent => (Absent, Absent),
        }
    }
}

impl<T> Opt<Opt<T>> {
    /// Collapses one level of nesting.
    pub fn flatten(self) -> Opt<T> {
        self.and_then(convert::identity)
    }
}

impl<T, E> Opt<Outcome<T, E>> {
    /// Swaps the outer `Opt` with an inner `Outcome`.
    pub fn transpose(self) -> Outcome<Opt<T>, E> {
        match self {
            Present(Success(value)) => Success(Present(value)),
            Present(Failure(error)) => Failure(error),
            Absent => Success(Absent),
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Opt<T> {
        Absent
    }
}

//-----------------------------------------------------------------------------
// Iterators
//-----------------------------------------------------------------------------

/// Borrowing iterator over at most one value. See [`Opt::iter`].
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

/// Consuming iterator over at most one value.
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

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
