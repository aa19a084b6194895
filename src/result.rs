use std::fmt;

const ERR_MESSAGE: &str = "called `or_fail` on an `Err` value";

/// The outcome of a computation: an `Ok` value or an `Err` error.
///
/// `T` and `E` are independent. The error slot takes any type, not only
/// `std::error::Error` implementors.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

/// An `Err` that was forced out of a [`Result`] by [`Result::or_fail`].
#[derive(Debug, thiserror::Error)]
#[error("{message}: {error:?}")]
pub struct ResultError<E: fmt::Debug> {
    message: String,
    error: E,
}

impl<E: fmt::Debug> ResultError<E> {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }
}

impl<T, E> Result<T, E> {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    #[doc(alias = "chain")]
    #[doc(alias = "bind")]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Recovers from an error, possibly changing the error type.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    pub fn get(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Always `Ok`: the existing value, else `value`.
    pub fn or_use(self, value: T) -> Self {
        Self::Ok(self.get(value))
    }

    /// Lazy form of [`Result::or_use`]: `f` only runs on `Err`.
    pub fn or_try(self, f: impl FnOnce() -> T) -> Self {
        match self {
            Self::Ok(_) => self,
            Self::Err(_) => Self::Ok(f()),
        }
    }

    pub fn transform<U>(self, f: impl FnOnce(Self) -> U) -> U {
        f(self)
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Leaves the container for `?`-style propagation, keeping the error payload.
    pub fn or_fail(self, message: Option<&str>) -> std::result::Result<T, ResultError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => {
                Err(ResultError { message: message.unwrap_or(ERR_MESSAGE).to_owned(), error })
            }
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|inner| inner)
    }
}
