//! Error types for the binding engine

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// Boxed error returned by custom text decoders
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Binding errors
///
/// The first failure aborts a bind call. Fields assigned before it keep
/// their new values.
#[derive(Error, Debug)]
pub enum Error {
    /// A required key is absent from every consulted source
    #[error("not found resource")]
    NotFound,

    /// A key resolved to more than one value, or a long flag repeated before
    /// any value was attached to it
    #[error("duplicate error")]
    Duplicate,

    /// The field kind has no coercion rule, or the source value has the wrong
    /// runtime type for the field
    #[error("type not support {0}")]
    TypeNotSupport(String),

    /// The bind target or input is not a structured record
    #[error("invalid bind target: {0}")]
    InvalidTarget(String),

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// Finite text that does not fit the float field's width
    #[error("parsing {0:?}: value out of range")]
    FloatRange(String),

    #[error(transparent)]
    ParseBool(#[from] ParseBoolError),

    /// Error raised by a field's own text decoder
    #[error(transparent)]
    Decode(BoxError),
}

impl Error {
    /// Wrap an error coming out of a custom decoder
    pub fn decode<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Decode(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::Duplicate)
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
