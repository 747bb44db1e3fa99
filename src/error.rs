//! The crate's single surfaced error category: caller misuse of [`crate::Options`].
//!
//! "No parse" is never an error — it is `Ok(None)` from [`crate::parse`].

use thiserror::Error;

/// Reported synchronously when the caller supplies an out-of-range or
/// otherwise disallowed option value. This is the only error category the
/// core raises; a non-matching input is reported as `Ok(None)`, never as
/// `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid value for option `{option}`: {reason}")]
    InvalidOptionValue { option: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidOptionValue { option, reason: reason.into() }
    }
}
