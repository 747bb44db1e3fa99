//! Core data model: [`Instant`] and [`Span`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An absolute moment at one-second resolution in the proleptic Gregorian
/// calendar. Deliberately zone-less: `TimeZone` tags are recognized
/// lexically by the tagger but never applied as a UTC offset here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(NaiveDateTime);

impl Instant {
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, min, sec)?;
        Some(Self(NaiveDateTime::new(date, time)))
    }

    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(self) -> NaiveTime {
        self.0.time()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn second(self) -> u32 {
        self.0.second()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn at_start_of_day(self) -> Self {
        Self(self.0.date().and_hms_opt(0, 0, 0).unwrap())
    }

    /// The instant exactly `secs` seconds later (or earlier, if negative).
    pub fn add_seconds(self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Add `months` calendar months, clamping the day-of-month into the
    /// target month (e.g. Jan 31 + 1 month -> Feb 28/29).
    pub fn add_months(self, months: i32) -> Self {
        let total = self.0.year() * 12 + self.0.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month0 = total.rem_euclid(12);
        let month = (month0 + 1) as u32;
        let last_day = days_in_month(year, month);
        let day = self.0.day().min(last_day);
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Self(NaiveDateTime::new(date, self.0.time()))
    }

    pub fn add_years(self, years: i32) -> Self {
        self.add_months(years * 12)
    }

    /// Seconds elapsed from `other` to `self` (negative if `self` precedes `other`).
    pub fn seconds_since(self, other: Self) -> i64 {
        (self.0 - other.0).num_seconds()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A half-open interval `[begin, end)` of [`Instant`]s.
///
/// Invariant: `end > begin`. Constructing with `end <= begin` panics —
/// handlers that cannot guarantee this must return `None` instead of
/// building a degenerate `Span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub begin: Instant,
    pub end: Instant,
}

impl Span {
    pub fn new(begin: Instant, end: Instant) -> Self {
        assert!(end > begin, "Span end must be strictly after begin");
        Self { begin, end }
    }

    /// Builds a `Span`, returning `None` instead of panicking when the
    /// interval would be empty or inverted.
    pub fn try_new(begin: Instant, end: Instant) -> Option<Self> {
        if end > begin { Some(Self { begin, end }) } else { None }
    }

    /// A single-second point span starting at `at`.
    pub fn point(at: Instant) -> Self {
        Self { begin: at, end: at.add_seconds(1) }
    }

    pub fn width(self) -> i64 {
        self.end.seconds_since(self.begin)
    }

    pub fn contains(self, instant: Instant) -> bool {
        instant >= self.begin && instant < self.end
    }

    /// Shifts both endpoints by `secs` seconds.
    pub fn shift_seconds(self, secs: i64) -> Self {
        Self { begin: self.begin.add_seconds(secs), end: self.end.add_seconds(secs) }
    }

    /// The midpoint used by the guesser: `begin` for unit (width == 1)
    /// spans, else `begin + width/2` with integer division rounding
    /// toward `begin`.
    pub fn guess(self) -> Instant {
        if self.width() <= 1 {
            self.begin
        } else {
            self.begin.add_seconds(self.width() / 2)
        }
    }
}
