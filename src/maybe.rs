use std::fmt;

/// Default message for [`Maybe::or_fail`] when the caller gives none.
const NOTHING_MESSAGE: &str = "called `or_fail` on a `Nothing` value";

/// An optional value: either `Some` payload or `Nothing`.
///
/// Absence is a variant, never a sentinel inside the payload. Callers branch on
/// it with an exhaustive `match` or use the combinators below.
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NothingError {
    message: String,
}

impl NothingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NothingError {
    fn default() -> Self {
        Self::new(NOTHING_MESSAGE)
    }
}

impl<T> Maybe<T> {
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrowed view of the payload.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Sequences a computation that may itself produce nothing.
    #[doc(alias = "chain")]
    #[doc(alias = "bind")]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the payload, or `default` when there is none.
    pub fn get(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Nothing => f(),
        }
    }

    /// Always `Some`: the existing payload, else `value`.
    pub fn or_use(self, value: T) -> Self {
        Self::Some(self.get(value))
    }

    pub fn or_try(self, f: impl FnOnce() -> T) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Nothing => Self::Some(f()),
        }
    }

    /// Leaves the container for `?`-style propagation.
    ///
    /// `Nothing` turns into a [`NothingError`] carrying `message`, or a default
    /// message when `message` is `None`.
    pub fn or_fail(self, message: Option<&str>) -> Result<T, NothingError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(message.map(NothingError::new).unwrap_or_default()),
        }
    }

    /// Hands the whole container to `f`, for pipelines that end outside `Maybe`.
    pub fn transform<U>(self, f: impl FnOnce(Self) -> U) -> U {
        f(self)
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => f.debug_tuple("Some").field(value).finish(),
            Self::Nothing => f.write_str("Nothing()"),
        }
    }
}
