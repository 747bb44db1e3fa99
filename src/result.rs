//! The two shapes [`crate::parse`] can hand back, selected by
//! [`crate::Options::guess`] (§4.5, §6).

use crate::types::{Instant, Span};

/// A successful parse, before or after the optional guess projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    /// `options.guess` was true: the Span's guessed instant.
    Instant(Instant),
    /// `options.guess` was false: the raw matched Span.
    Span(Span),
}

impl ParseResult {
    /// The Instant a caller would get back had `guess` been set, whichever
    /// variant this is.
    pub fn guess(self) -> Instant {
        match self {
            ParseResult::Instant(i) => i,
            ParseResult::Span(s) => s.guess(),
        }
    }

    pub fn span(self) -> Option<Span> {
        match self {
            ParseResult::Span(s) => Some(s),
            ParseResult::Instant(_) => None,
        }
    }
}
