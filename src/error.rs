use thiserror::Error;

/// Errors that can occur while building or growing a tree of [`Number`][crate::number::Number]s.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum Error {
    /// The value has no place in a total order (i.e. it is `NaN`).
    #[error("value {0} is not comparable")]
    InvalidInput(f64),
}

/// A `Result` alias where the error is always this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
