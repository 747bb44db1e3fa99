//! The five date-construction handlers backing the `DATE` and `ENDIAN`
//! lists (§4.4): month-name dates in both word orders, the ISO numeric
//! form, and the two slash-separated numeric endians. All five share the
//! two-digit-year pivot and invalid-date rejection logic at the bottom
//! of this file.

use crate::handlers::time;
use crate::handlers::util::{repeater_units, scalars};
use crate::options::{AmbiguousTimeRange, Options};
use crate::token::{RepeaterUnit, Token};
use crate::types::{Instant, Span};

/// Resolves a literal year value against the reference year and
/// `ambiguous_year_future_bias` (§4.4): a year already written with 3+
/// digits is taken literally. A bare 1-2 digit year maps into the
/// reference instant's century, or the previous century, whichever keeps
/// it within `bias` years of the future relative to the reference year.
fn resolve_year(literal: i64, reference_year: i32, bias: i32) -> i32 {
    if literal >= 100 {
        return literal as i32;
    }
    let century = (reference_year / 100) * 100;
    let two_digit_ref = reference_year % 100;
    if (literal as i32) < two_digit_ref + bias {
        century + literal as i32
    } else {
        century - 100 + literal as i32
    }
}

/// Splits the tokens following a required day scalar into an optional
/// literal year and the remaining time-of-day tail, mirroring the
/// greedy-Optional-then-OptionalSub matching order the grammar itself
/// used to accept this token run (§4.3): a leading scalar is read as the
/// year only if what follows it is empty or itself a valid time-of-day
/// match, otherwise the whole remainder is the time tail.
fn split_year_and_time<'a>(rest: &'a [Token], range: AmbiguousTimeRange) -> (Option<i64>, &'a [Token]) {
    if let Some((head, tail)) = rest.split_first()
        && let Some(&year) = scalars(std::slice::from_ref(head)).first()
        && (tail.is_empty() || time::extract(tail, range).is_some())
    {
        return (Some(year), tail);
    }
    (None, rest)
}

/// Builds the final `Span` for a resolved `(year, month, day)` plus an
/// optional time-of-day tail: a single-second point span if a time was
/// given, else the whole day. Returns `None` for a calendar-invalid date
/// (e.g. February 30th) so the matcher can move on to the next pattern
/// (§4.4, §7).
fn build_span(year: i32, month: u32, day: u32, tail: &[Token], options: &Options) -> Option<Span> {
    match time::extract(tail, options.ambiguous_time_range) {
        Some(t) => {
            let at = Instant::from_ymd_hms(year, month, day, t.hour, t.minute, t.second)?;
            Span::try_new(at, at.add_seconds(1))
        }
        None => {
            let begin = Instant::from_ymd_hms(year, month, day, 0, 0, 0)?;
            Span::try_new(begin, begin.add_days(1))
        }
    }
}

fn month_of(token: &Token) -> Option<u32> {
    repeater_units(std::slice::from_ref(token)).into_iter().find_map(|u| match u {
        RepeaterUnit::MonthName(m) => Some(m),
        _ => None,
    })
}

/// `"november 15 2006"` / `"november 15 2006 at 4pm"`.
pub fn handle_month_name_day_year(tokens: &[Token], options: &Options) -> Option<Span> {
    let (month_tok, rest) = tokens.split_first()?;
    let month = month_of(month_tok)?;
    let (day_tok, rest) = rest.split_first()?;
    let day = *scalars(std::slice::from_ref(day_tok)).first()?;
    let (year_literal, tail) = split_year_and_time(rest, options.ambiguous_time_range);
    let reference_year = options.reference_instant().year();
    let year = year_literal
        .map(|y| resolve_year(y, reference_year, options.ambiguous_year_future_bias))
        .unwrap_or(reference_year);
    build_span(year, month, day as u32, tail, options)
}

/// `"15 november 2006"`.
pub fn handle_day_month_name_year(tokens: &[Token], options: &Options) -> Option<Span> {
    let (day_tok, rest) = tokens.split_first()?;
    let day = *scalars(std::slice::from_ref(day_tok)).first()?;
    let (month_tok, rest) = rest.split_first()?;
    let month = month_of(month_tok)?;
    let (year_literal, tail) = split_year_and_time(rest, options.ambiguous_time_range);
    let reference_year = options.reference_instant().year();
    let year = year_literal
        .map(|y| resolve_year(y, reference_year, options.ambiguous_year_future_bias))
        .unwrap_or(reference_year);
    build_span(year, month, day as u32, tail, options)
}

/// `"2011-03-04"` (also accepted with `/` separators, already stripped by
/// the matcher's per-list filtering). Disambiguated from the endian
/// patterns, which share this exact atom shape, purely by the leading
/// scalar's magnitude: a year is always written with 3+ digits here,
/// while the endian forms never put a year first.
pub fn handle_iso_year_month_day(tokens: &[Token], options: &Options) -> Option<Span> {
    let values = scalars(&tokens[..3.min(tokens.len())]);
    let (&year, &month, &day) = (values.first()?, values.get(1)?, values.get(2)?);
    if year < 100 {
        return None;
    }
    build_span(year as i32, month as u32, day as u32, &tokens[3..], options)
}

fn slash_date(tokens: &[Token], options: &Options, order: [usize; 3]) -> Option<Span> {
    let values = scalars(&tokens[..3.min(tokens.len())]);
    let parts = [*values.first()?, *values.get(1)?, *values.get(2)?];
    let (month, day, year_literal) = (parts[order[0]], parts[order[1]], parts[order[2]]);
    let reference_year = options.reference_instant().year();
    let year = resolve_year(year_literal, reference_year, options.ambiguous_year_future_bias);
    build_span(year, month as u32, day as u32, &tokens[3..], options)
}

/// `"03/04/2011"` read month-first: March 4th, 2011.
pub fn handle_mdy_slash(tokens: &[Token], options: &Options) -> Option<Span> {
    slash_date(tokens, options, [0, 1, 2])
}

/// `"03/04/2011"` read day-first: April 3rd, 2011.
pub fn handle_dmy_slash(tokens: &[Token], options: &Options) -> Option<Span> {
    slash_date(tokens, options, [1, 0, 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::normalizer::normalize;
    use crate::taggers;
    use crate::token::tokenize;
    use std::sync::Arc;

    fn options_at(y: i32, m: u32, d: u32) -> Options {
        let now = Instant::from_ymd_hms(y, m, d, 12, 0, 0).unwrap();
        Options { clock: Arc::new(FixedClock(now)), ..Options::default() }
    }

    fn tag_text(text: &str) -> Vec<Token> {
        taggers::run(tokenize(&normalize(text)))
    }

    #[test]
    fn month_name_day_year_builds_whole_day_span() {
        let tokens = tag_text("november 15 2006");
        let span = handle_month_name_day_year(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2006, 11, 15, 0, 0, 0).unwrap());
        assert_eq!(span.end, Instant::from_ymd_hms(2006, 11, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_name_day_without_year_uses_reference_year() {
        let tokens = tag_text("november 15");
        let span = handle_month_name_day_year(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin.year(), 2006);
    }

    #[test]
    fn day_month_name_year_word_order() {
        let tokens = tag_text("15 november 2006");
        let span = handle_day_month_name_year(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2006, 11, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn iso_form_rejects_small_leading_scalar() {
        let tokens = tag_text("03 04 2011");
        assert!(handle_iso_year_month_day(&tokens, &options_at(2006, 1, 1)).is_none());
    }

    #[test]
    fn iso_form_accepts_year_leading() {
        let tokens = tag_text("2011 03 04");
        let span = handle_iso_year_month_day(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2011, 3, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn mdy_slash_reads_month_first() {
        let tokens = tag_text("03 04 2011");
        let span = handle_mdy_slash(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2011, 3, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn dmy_slash_reads_day_first() {
        let tokens = tag_text("03 04 2011");
        let span = handle_dmy_slash(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin, Instant::from_ymd_hms(2011, 4, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn two_digit_year_pivots_near_future_bias() {
        // bias 50, reference year 2006: literal 30 < (6 + 50) -> 2030.
        let tokens = tag_text("03 04 30");
        let span = handle_mdy_slash(&tokens, &options_at(2006, 1, 1)).unwrap();
        assert_eq!(span.begin.year(), 2030);
    }

    #[test]
    fn two_digit_year_pivot_with_zero_bias_has_no_forward_slack() {
        // bias 0, reference year 2006 (two-digit 06): literal < 06 maps to
        // the current century, literal >= 06 maps to the previous one.
        let opts = Options { ambiguous_year_future_bias: 0, ..options_at(2006, 1, 1) };
        let below = tag_text("03 04 05");
        assert_eq!(handle_mdy_slash(&below, &opts).unwrap().begin.year(), 2005);
        let at_or_above = tag_text("03 04 06");
        assert_eq!(handle_mdy_slash(&at_or_above, &opts).unwrap().begin.year(), 1906);
    }

    #[test]
    fn invalid_calendar_date_returns_none() {
        let tokens = tag_text("february 30 2006");
        assert!(handle_month_name_day_year(&tokens, &options_at(2006, 1, 1)).is_none());
    }
}
