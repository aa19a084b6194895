//! Turns fallible functions into ones that return [`Result`] for the failures
//! the caller expects, and hand everything else back untouched.

use std::{fmt, marker::PhantomData};

use crate::Result;

/// An error kind (or set of kinds) the adapter is allowed to capture.
pub trait Declared: Sized {
    /// Claims `error` if it is one of the declared kinds, otherwise gives it back.
    fn capture(error: anyhow::Error) -> std::result::Result<Self, anyhow::Error>;
}

impl<E> Declared for E
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn capture(error: anyhow::Error) -> std::result::Result<Self, anyhow::Error> {
        error.downcast::<E>()
    }
}

/// Two declared kinds. Nest the right side for more: `OneOf<A, OneOf<B, C>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOf<A, B> {
    First(A),
    Second(B),
}

impl<A: Declared, B: Declared> Declared for OneOf<A, B> {
    fn capture(error: anyhow::Error) -> std::result::Result<Self, anyhow::Error> {
        match A::capture(error) {
            Ok(first) => Ok(Self::First(first)),
            Err(error) => B::capture(error).map(Self::Second),
        }
    }
}

/// Adapter for the declared kinds `K`. Built with [`catch`].
pub struct Catch<K> {
    kinds: PhantomData<fn() -> K>,
}

/// Starts an adapter that captures failures of kind `K`.
///
/// ```
/// use std::num::ParseIntError;
///
/// use mona::{catch, Result};
///
/// let parse = catch::<ParseIntError>().wrap(|s: &str| s.parse::<i64>());
/// assert_eq!(parse("2").unwrap(), Result::Ok(2));
/// assert!(parse("abc").unwrap().is_err());
/// ```
pub fn catch<K: Declared>() -> Catch<K> {
    Catch { kinds: PhantomData }
}

impl<K: Declared> Catch<K> {
    /// Runs `f` once.
    ///
    /// The outer `Err` holds failures that are not of a declared kind, unchanged,
    /// so the caller's `?` keeps propagating them.
    pub fn call<T, X>(
        &self,
        f: impl FnOnce() -> std::result::Result<T, X>,
    ) -> anyhow::Result<Result<T, K>>
    where
        X: Into<anyhow::Error>,
    {
        match f() {
            Ok(value) => Ok(Result::Ok(value)),
            Err(error) => match K::capture(error.into()) {
                Ok(kind) => {
                    tracing::trace!("captured declared failure {}", std::any::type_name::<K>());
                    Ok(Result::Err(kind))
                }
                Err(error) => {
                    tracing::debug!("undeclared failure propagated: {}", error);
                    Err(error)
                }
            },
        }
    }

    /// Wraps `f` so each call goes through [`Catch::call`]. Pass several
    /// arguments as a tuple.
    pub fn wrap<A, T, X>(
        self,
        f: impl Fn(A) -> std::result::Result<T, X>,
    ) -> impl Fn(A) -> anyhow::Result<Result<T, K>>
    where
        X: Into<anyhow::Error>,
    {
        move |args| self.call(|| f(args))
    }
}

impl<T, E> Result<T, E> {
    /// Recovers from `Err` by running `f` through [`Catch::call`].
    ///
    /// `Ok` passes through without running `f`. On `Err` the old error is
    /// dropped; a declared failure of `f` becomes the new `Err`, and any other
    /// failure comes back in the outer `Err`.
    pub fn or_try_catch<K, X, F>(self, f: F) -> anyhow::Result<Result<T, K>>
    where
        K: Declared,
        X: Into<anyhow::Error>,
        F: FnOnce() -> std::result::Result<T, X>,
    {
        match self {
            Self::Ok(value) => Ok(Result::Ok(value)),
            Self::Err(_) => catch::<K>().call(f),
        }
    }
}

impl<K> Clone for Catch<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Catch<K> {}

impl<K> fmt::Debug for Catch<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catch").field("kinds", &std::any::type_name::<K>()).finish()
    }
}
