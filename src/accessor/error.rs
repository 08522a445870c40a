//! Error type for the internal fallible parsing layer.

use std::num::ParseIntError;
use std::str::Utf8Error;
use thiserror::Error;

/// Why a parameter value could not be produced.
///
/// Never crosses the defaulted public accessors; surfaced only by the
/// `try_*` functions and [`crate::RequestParameter::string_value`].
#[derive(Debug, Error)]
pub enum ValueError {
    /// Parameter absent, or present but blank where a value is required.
    #[error("parameter is missing or blank")]
    Missing,

    #[error("not a valid integer: {0}")]
    Int(#[from] ParseIntError),

    /// Value is neither `true` nor `false` (case-insensitive).
    #[error("not a valid boolean: {0:?}")]
    Bool(String),

    #[error("parameter bytes are not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
}
