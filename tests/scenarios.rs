//! Integration coverage for the worked scenarios and boundary behaviors
//! pinned to the reference instant `2006-08-16 14:00:00`.

use chronopoint::{AmbiguousTimeRange, Endian, Instant, Options, ParseResult};
use std::sync::Arc;

struct FixedClock(Instant);

impl chronopoint::ClockProvider for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

fn reference_now() -> Instant {
    Instant::from_ymd_hms(2006, 8, 16, 14, 0, 0).unwrap()
}

fn options() -> Options {
    Options::default().with_clock_provider(Arc::new(FixedClock(reference_now())))
}

fn guess(text: &str, options: &Options) -> Instant {
    match chronopoint::parse(text, options).unwrap().unwrap() {
        ParseResult::Instant(i) => i,
        ParseResult::Span(s) => s.guess(),
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Instant::from_ymd_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn now() {
    assert_eq!(guess("now", &options()), at(2006, 8, 16, 14, 0, 0));
}

#[test]
fn tomorrow() {
    assert_eq!(guess("tomorrow", &options()), at(2006, 8, 17, 12, 0, 0));
}

#[test]
fn yesterday_at_4_resolves_ambiguous_pm() {
    assert_eq!(guess("yesterday at 4:00", &options()), at(2006, 8, 15, 16, 0, 0));
}

#[test]
fn three_weeks_from_now() {
    assert_eq!(guess("3 weeks from now", &options()), at(2006, 9, 6, 14, 0, 0));
}

#[test]
fn third_wednesday_in_november() {
    assert_eq!(guess("3rd wednesday in november", &options()), at(2006, 11, 15, 12, 0, 0));
}

#[test]
fn slash_date_middle_endian_precedence() {
    let opts = options().with_endian_precedence(vec![Endian::Middle, Endian::Little]);
    assert_eq!(guess("03/04/2011", &opts), at(2011, 3, 4, 12, 0, 0));
}

#[test]
fn slash_date_little_endian_precedence() {
    let opts = options().with_endian_precedence(vec![Endian::Little, Endian::Middle]);
    assert_eq!(guess("03/04/2011", &opts), at(2011, 4, 3, 12, 0, 0));
}

#[test]
fn end_of_day_sentinel_lands_at_midnight_next_day() {
    assert_eq!(guess("24:00", &options()), at(2006, 8, 17, 0, 0, 0));
}

#[test]
fn start_of_day_is_midnight() {
    let instant = guess("00:00", &options());
    assert_eq!(instant.hour(), 0);
    assert_eq!(instant.minute(), 0);
}

#[test]
fn noon_and_midnight_words() {
    assert_eq!(guess("noon", &options()).hour(), 12);
    assert_eq!(guess("midnight", &options()), at(2006, 8, 17, 0, 0, 0));
}

#[test]
fn two_digit_year_at_exact_pivot_maps_to_previous_century() {
    // reference year 2006, bias 50: literal 56 == (06 + 50) -> previous century (1956).
    let opts = options();
    assert_eq!(guess("03/04/56", &opts).year(), 1956);
}

#[test]
fn trailing_time_zone_word_is_ignored_as_metadata() {
    assert_eq!(guess("yesterday at 4:00 est", &options()), at(2006, 8, 15, 16, 0, 0));
}

#[test]
fn feb_29_in_non_leap_year_does_not_parse() {
    assert!(chronopoint::parse("february 29 2006", &options()).unwrap().is_none());
}

#[test]
fn reference_instant_independent_result_for_absolute_dates() {
    let a = options();
    let b = options().with_now(at(1999, 1, 1, 0, 0, 0));
    assert_eq!(guess("november 15 2006", &a), guess("november 15 2006", &b));
}

#[test]
fn repeated_parses_of_the_same_input_agree() {
    for text in ["tomorrow at 7pm", "3 weeks from now", "03/04/2011", "3rd wednesday in november"] {
        let once = chronopoint::parse(text, &options()).unwrap();
        let twice = chronopoint::parse(text, &options()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn unknown_option_value_is_an_error_not_a_panic() {
    let opts = options().with_ambiguous_time_range(AmbiguousTimeRange::Hours(13));
    assert!(chronopoint::parse("now", &opts).is_err());
}

#[test]
fn guess_false_yields_a_span_whose_begin_matches_the_guess_instant() {
    let opts = options().with_guess(false);
    let span = chronopoint::parse("tomorrow", &opts).unwrap().unwrap().span().unwrap();
    assert!(span.end > span.begin);
    let instant = guess("tomorrow", &options());
    assert!(span.contains(instant));
}
