// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Present/absent values with a total match combinator.

use serde::{Deserialize, Serialize};

use crate::error::PreludeError;

/// A value that is either [`Present`](Optional::Present) or
/// [`Absent`](Optional::Absent).
///
/// Exactly one variant is active and the type is immutable once built.
/// Equality is structural: two optionals are equal when both are absent, or
/// both are present with equal payloads.
///
/// # Ordering
///
/// `Optional` is totally ordered and the order agrees with `Eq`: `Absent`
/// sorts before every `Present`, and two `Present` values compare by payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A wrapped value.
    Present(T),
}

impl<T> Optional<T> {
    /// Total match: calls exactly one of `on_present` / `on_absent`.
    #[inline]
    pub fn match_with<U>(self, on_present: impl FnOnce(T) -> U, on_absent: impl FnOnce() -> U) -> U {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Borrows the wrapped value.
    ///
    /// # Errors
    ///
    /// [`PreludeError::EmptyValueAccess`] when called on `Absent`; branch with
    /// [`match_with`](Self::match_with) instead when absence is expected.
    #[inline]
    pub fn value(&self) -> Result<&T, PreludeError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(PreludeError::EmptyValueAccess),
        }
    }

    /// Consumes the optional and returns the wrapped value.
    ///
    /// # Errors
    ///
    /// [`PreludeError::EmptyValueAccess`] when called on `Absent`.
    #[inline]
    pub fn into_value(self) -> Result<T, PreludeError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(PreludeError::EmptyValueAccess),
        }
    }

    /// `true` for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// `true` for `Absent`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `f` to a present payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        self.match_with(|v| Optional::Present(f(v)), || Optional::Absent)
    }

    /// Monadic bind: chains a computation that may itself be absent.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        self.match_with(f, || Optional::Absent)
    }

    /// Returns `self` if present, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => f(),
        }
    }

    /// Returns the payload or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|v| v, || default)
    }

    /// Returns the payload or computes a fallback.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        self.match_with(|v| v, f)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.match_with(Some, || None)
    }
}
