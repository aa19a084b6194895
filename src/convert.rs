//! Bridges between [`Maybe`], [`Result`] and their `std` counterparts.

use crate::{Maybe, Result};

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

/// Lifts a `std` option, mapping `None` to `Nothing`.
pub fn from_optional<T>(value: Option<T>) -> Maybe<T> {
    value.into()
}

impl<T> Maybe<T> {
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(error),
        }
    }

    /// `Nothing` becomes `Err(())`: the absence carries no information.
    pub fn into_result(self) -> Result<T, ()> {
        self.ok_or(())
    }
}

impl<T, E> Result<T, E> {
    /// Drops the error, keeping only whether a value is present.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::Nothing,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}
