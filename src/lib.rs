//! Parses short natural-language English date/time expressions into an
//! absolute instant or a half-open span, relative to a caller-supplied (or
//! system) reference instant.
//!
//! The pipeline: [`normalizer::normalize`] -> [`token::tokenize`] ->
//! [`taggers::run`] -> grammar match -> handler -> optional
//! [`types::Span::guess`]. See `SPEC_FULL.md` for the full design.

pub mod clock;
pub mod error;
pub mod options;
pub mod result;
pub mod types;

mod grammar;
mod handlers;
mod normalizer;
mod numerizer;
mod repeater;
mod taggers;
mod token;

pub use clock::ClockProvider;
pub use error::Error;
pub use options::{AmbiguousTimeRange, Context, Endian, Options};
pub use result::ParseResult;
pub use types::{Instant, Span};

/// Runs the full pipeline (§2): normalize, tokenize, tag, grammar-match,
/// then project through the guesser if `options.guess` is set.
///
/// Returns `Ok(None)` when nothing matches — a non-parse is never an
/// error (§7). The only surfaced `Err` is caller misuse of `options`.
pub fn parse(text: &str, options: &Options) -> Result<Option<ParseResult>, Error> {
    options.validate()?;

    let normalized = normalizer::normalize(text);
    tracing::trace!(stage = "normalize", input = text, output = %normalized);

    let tokens = token::tokenize(&normalized);
    let tagged = taggers::run(tokens);
    tracing::trace!(stage = "tokenize+tag", token_count = tagged.len());

    let Some(span) = grammar::parse_tokens(&tagged, options) else {
        tracing::debug!(stage = "match", matched = false);
        return Ok(None);
    };
    tracing::debug!(stage = "match", matched = true, width_seconds = span.width());

    if options.guess {
        let guessed = span.guess();
        tracing::trace!(stage = "guess", instant = %guessed);
        Ok(Some(ParseResult::Instant(guessed)))
    } else {
        Ok(Some(ParseResult::Span(span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock::FixedClock;
    use std::sync::Arc;

    fn options_at(now: Instant) -> Options {
        Options { clock: Arc::new(FixedClock(now)), ..Options::default() }
    }

    fn reference_now() -> Instant {
        Instant::from_ymd_hms(2006, 8, 16, 14, 0, 0).unwrap()
    }

    #[test]
    fn now_resolves_to_reference_instant() {
        let result = parse("now", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), reference_now());
    }

    #[test]
    fn tomorrow_resolves_to_next_day_midpoint() {
        let result = parse("tomorrow", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2006, 8, 17, 12, 0, 0).unwrap());
    }

    #[test]
    fn yesterday_at_4_resolves_to_pm() {
        let result = parse("yesterday at 4:00", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2006, 8, 15, 16, 0, 0).unwrap());
    }

    #[test]
    fn three_weeks_from_now() {
        let result = parse("3 weeks from now", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2006, 9, 6, 14, 0, 0).unwrap());
    }

    #[test]
    fn third_wednesday_in_november() {
        let result = parse("3rd wednesday in november", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2006, 11, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn slash_date_middle_endian_default() {
        let result = parse("03/04/2011", &options_at(reference_now())).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2011, 3, 4, 12, 0, 0).unwrap());
    }

    #[test]
    fn slash_date_little_endian_flips_day_and_month() {
        let opts = Options { endian_precedence: vec![Endian::Little, Endian::Middle], ..options_at(reference_now()) };
        let result = parse("03/04/2011", &opts).unwrap().unwrap();
        assert_eq!(result.guess(), Instant::from_ymd_hms(2011, 4, 3, 12, 0, 0).unwrap());
    }

    #[test]
    fn unmatched_input_returns_ok_none() {
        let result = parse("absolutely not a date", &options_at(reference_now())).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn out_of_range_option_surfaces_as_error() {
        let opts = Options { ambiguous_time_range: AmbiguousTimeRange::Hours(13), ..options_at(reference_now()) };
        assert!(parse("now", &opts).is_err());
    }

    #[test]
    fn guess_false_returns_the_raw_span() {
        let opts = Options { guess: false, ..options_at(reference_now()) };
        let result = parse("tomorrow", &opts).unwrap().unwrap();
        let span = result.span().unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2006, 8, 17, 0, 0, 0).unwrap());
        assert_eq!(span.end, Instant::from_ymd_hms(2006, 8, 18, 0, 0, 0).unwrap());
    }
}
