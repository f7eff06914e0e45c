//! Typed errors for unit lookup and form input.

use thiserror::Error;

/// Failure to map user input onto a base or a unit option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Only bases 2 and 10 are supported.
    #[error("unsupported base {0:?} (expected 2 or 10)")]
    UnsupportedBase(String),
    /// No option matched by display name, unit name or abbreviation.
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
}

/// Failure to parse or apply one line of interactive form input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),
    #[error("unknown field {0:?} (expected total, downloaded or speed)")]
    UnknownField(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error(transparent)]
    Unit(#[from] UnitError),
}
