//! The Repeater tagger (§4.2 "Repeater"): recognizes calendar units, named
//! months/days, seasons, day portions, and explicit clock times.
//!
//! A bare `"7"` is left untagged here — without a colon or a following
//! meridian/`oclock` token it is just a [`crate::token::Tag::Scalar`],
//! resolved by [`crate::taggers::scalar`] instead.

use crate::token::{DayPortion, RepeaterUnit, Season, Tag, Token};
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static MONTH_NAMES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1), ("jan", 1),
        ("february", 2), ("feb", 2),
        ("march", 3), ("mar", 3),
        ("april", 4), ("apr", 4),
        ("may", 5),
        ("june", 6), ("jun", 6),
        ("july", 7), ("jul", 7),
        ("august", 8), ("aug", 8),
        ("september", 9), ("sep", 9), ("sept", 9),
        ("october", 10), ("oct", 10),
        ("november", 11), ("nov", 11),
        ("december", 12), ("dec", 12),
    ])
});

static DAY_NAMES: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    HashMap::from([
        ("monday", Weekday::Mon), ("mon", Weekday::Mon),
        ("tuesday", Weekday::Tue), ("tue", Weekday::Tue), ("tues", Weekday::Tue),
        ("wednesday", Weekday::Wed), ("wed", Weekday::Wed),
        ("thursday", Weekday::Thu), ("thu", Weekday::Thu), ("thurs", Weekday::Thu),
        ("friday", Weekday::Fri), ("fri", Weekday::Fri),
        ("saturday", Weekday::Sat), ("sat", Weekday::Sat),
        ("sunday", Weekday::Sun), ("sun", Weekday::Sun),
    ])
});

static SEASON_NAMES: Lazy<HashMap<&'static str, Season>> = Lazy::new(|| {
    HashMap::from([
        ("spring", Season::Spring),
        ("summer", Season::Summer),
        ("fall", Season::Fall),
        ("autumn", Season::Fall),
        ("winter", Season::Winter),
    ])
});

static DAY_PORTION_NAMES: Lazy<HashMap<&'static str, DayPortion>> = Lazy::new(|| {
    HashMap::from([
        ("am", DayPortion::Am),
        ("pm", DayPortion::Pm),
        ("morning", DayPortion::Morning),
        ("afternoon", DayPortion::Afternoon),
        ("evening", DayPortion::Evening),
        ("night", DayPortion::Night),
    ])
});

static UNIT_NAMES: Lazy<HashMap<&'static str, RepeaterUnit>> = Lazy::new(|| {
    HashMap::from([
        ("year", RepeaterUnit::Year),
        ("years", RepeaterUnit::Year),
        ("month", RepeaterUnit::Month),
        ("months", RepeaterUnit::Month),
        ("fortnight", RepeaterUnit::Fortnight),
        ("fortnights", RepeaterUnit::Fortnight),
        ("week", RepeaterUnit::Week),
        ("weeks", RepeaterUnit::Week),
        ("weekend", RepeaterUnit::Weekend),
        ("weekends", RepeaterUnit::Weekend),
        ("weekday", RepeaterUnit::Weekday),
        ("weekdays", RepeaterUnit::Weekday),
        ("day", RepeaterUnit::Day),
        ("days", RepeaterUnit::Day),
        ("hour", RepeaterUnit::Hour),
        ("hours", RepeaterUnit::Hour),
        ("minute", RepeaterUnit::Minute),
        ("minutes", RepeaterUnit::Minute),
        ("min", RepeaterUnit::Minute),
        ("mins", RepeaterUnit::Minute),
        ("second", RepeaterUnit::Second),
        ("seconds", RepeaterUnit::Second),
        ("sec", RepeaterUnit::Second),
        ("secs", RepeaterUnit::Second),
    ])
});

/// `HH[:MM[:SS]]`, no meridian attached — the normalizer always splits a
/// trailing `am`/`pm` off into its own token (§4.1 step 9).
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]|0[0-9]|1[0-9]|2[0-4]):([0-5][0-9])(?::([0-5][0-9]))?$").unwrap());

/// Attaches zero or more `Tag::Repeater(_)` tags to `token` based on its word.
pub fn tag(token: &mut Token) {
    let word = token.word.as_str();

    if let Some(caps) = CLOCK_TIME.captures(word) {
        let hour: u32 = caps[1].parse().unwrap();
        let minute: u32 = caps[2].parse().unwrap();
        let second: u32 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap());
        token.push_tag(Tag::Repeater(RepeaterUnit::Time { hour, minute, second }));
        return;
    }

    if word == "oclock" {
        token.push_tag(Tag::Repeater(RepeaterUnit::Hour));
        return;
    }

    if let Some(&portion) = DAY_PORTION_NAMES.get(word) {
        token.push_tag(Tag::Repeater(RepeaterUnit::DayPortion(portion)));
        return;
    }

    if let Some(&month) = MONTH_NAMES.get(word) {
        token.push_tag(Tag::Repeater(RepeaterUnit::MonthName(month)));
        return;
    }

    if let Some(&weekday) = DAY_NAMES.get(word) {
        token.push_tag(Tag::Repeater(RepeaterUnit::DayName(weekday)));
        return;
    }

    if let Some(&season) = SEASON_NAMES.get(word) {
        token.push_tag(Tag::Repeater(RepeaterUnit::Season(season)));
        return;
    }

    if let Some(&unit) = UNIT_NAMES.get(word) {
        token.push_tag(Tag::Repeater(unit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::AtomKind;

    #[test]
    fn tags_bare_unit_word() {
        let mut t = Token::new("weeks");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Repeater(RepeaterUnit::Week)]);
    }

    #[test]
    fn tags_month_name_abbreviation() {
        let mut t = Token::new("mar");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Repeater(RepeaterUnit::MonthName(3))]);
    }

    #[test]
    fn tags_day_name() {
        let mut t = Token::new("monday");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Repeater(RepeaterUnit::DayName(Weekday::Mon))]);
    }

    #[test]
    fn tags_clock_time_without_meridian() {
        let mut t = Token::new("7:30");
        tag(&mut t);
        assert!(t.has(AtomKind::RepeaterTime));
    }

    #[test]
    fn tags_end_of_day_sentinel() {
        let mut t = Token::new("24:00");
        tag(&mut t);
        assert_eq!(
            t.tags,
            vec![Tag::Repeater(RepeaterUnit::Time { hour: 24, minute: 0, second: 0 })]
        );
    }

    #[test]
    fn does_not_tag_bare_digit() {
        let mut t = Token::new("7");
        tag(&mut t);
        assert!(!t.is_tagged());
    }

    #[test]
    fn tags_day_portion_words() {
        let mut t = Token::new("pm");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Repeater(RepeaterUnit::DayPortion(DayPortion::Pm))]);
    }
}
