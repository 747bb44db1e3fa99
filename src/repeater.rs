//! The Repeater family operator (§3 "Repeater", §9 design note): given a
//! unit and a reference instant, computes the occurrence of that unit for
//! "this" cycle, and steps to the next/previous occurrence.
//!
//! `current` always returns *this cycle's* occurrence (today's day portion,
//! this week's Monday, this year's March, ...) even when that occurrence's
//! start lies after the reference instant. `next`/`previous` then derive
//! correctly from a single comparison, uniformly across every unit — no
//! per-unit "which direction is nearest" logic is needed anywhere else.

use crate::token::{DayPortion, RepeaterUnit, Season};
use crate::types::{Instant, Span};
use chrono::Datelike;

/// The fortnight parity anchor: 1970-01-04 is a Sunday. Fortnights are
/// numbered in two-week blocks starting from this date, so "this
/// fortnight" is well-defined independent of the reference instant.
fn fortnight_epoch() -> Instant {
    Instant::from_ymd_hms(1970, 1, 4, 0, 0, 0).expect("valid epoch date")
}

fn week_start(pivot: Instant) -> Instant {
    let days_from_sunday = pivot.weekday().num_days_from_sunday() as i64;
    pivot.at_start_of_day().add_days(-days_from_sunday)
}

fn fortnight_start(pivot: Instant) -> Instant {
    let ws = week_start(pivot);
    let anchor = fortnight_epoch();
    let days = (ws.date() - anchor.date()).num_days();
    let weeks = days.div_euclid(7);
    let fortnight_weeks = weeks - weeks.rem_euclid(2);
    anchor.add_days(fortnight_weeks * 7)
}

fn day_portion_bounds(portion: DayPortion) -> (i64, i64) {
    const H: i64 = 3600;
    match portion {
        DayPortion::Am => (0, 12 * H),
        DayPortion::Pm => (12 * H, 24 * H),
        DayPortion::Morning => (6 * H, 12 * H),
        DayPortion::Afternoon => (12 * H, 18 * H),
        DayPortion::Evening => (18 * H, 21 * H),
        DayPortion::Night => (21 * H, 24 * H),
    }
}

fn season_start_month(season: Season) -> u32 {
    match season {
        Season::Spring => 3,
        Season::Summer => 6,
        Season::Fall => 9,
        Season::Winter => 12,
    }
}

/// Which calendar year's occurrence of `season` is "this cycle" relative
/// to `pivot`. Winter's Dec start can belong to the *previous* calendar
/// year's label when `pivot` falls in Jan/Feb.
fn season_year(season: Season, pivot: Instant) -> i32 {
    let start_month = season_start_month(season);
    if pivot.month() >= start_month {
        pivot.year()
    } else {
        pivot.year() - 1
    }
}

/// This cycle's occurrence of `unit` relative to `pivot`.
pub fn current(unit: RepeaterUnit, pivot: Instant) -> Span {
    match unit {
        RepeaterUnit::Second => Span::new(pivot, pivot.add_seconds(1)),
        RepeaterUnit::Minute => {
            let begin =
                Instant::from_ymd_hms(pivot.year(), pivot.month(), pivot.day(), pivot.hour(), pivot.minute(), 0)
                    .expect("valid minute boundary");
            Span::new(begin, begin.add_seconds(60))
        }
        RepeaterUnit::Hour => {
            let begin = Instant::from_ymd_hms(pivot.year(), pivot.month(), pivot.day(), pivot.hour(), 0, 0)
                .expect("valid hour boundary");
            Span::new(begin, begin.add_seconds(3600))
        }
        RepeaterUnit::Time { hour, minute, second } => {
            let begin = if hour == 24 {
                pivot.at_start_of_day().add_days(1)
            } else {
                Instant::from_ymd_hms(pivot.year(), pivot.month(), pivot.day(), hour, minute, second)
                    .expect("valid explicit clock time")
            };
            Span::new(begin, begin.add_seconds(1))
        }
        RepeaterUnit::Day | RepeaterUnit::Weekday => {
            let begin = pivot.at_start_of_day();
            Span::new(begin, begin.add_days(1))
        }
        RepeaterUnit::DayPortion(portion) => {
            let day_start = pivot.at_start_of_day();
            let (from, to) = day_portion_bounds(portion);
            Span::new(day_start.add_seconds(from), day_start.add_seconds(to))
        }
        RepeaterUnit::DayName(weekday) => {
            let ws = week_start(pivot);
            let offset = weekday.num_days_from_sunday() as i64;
            let begin = ws.add_days(offset);
            Span::new(begin, begin.add_days(1))
        }
        RepeaterUnit::Week => {
            let begin = week_start(pivot);
            Span::new(begin, begin.add_days(7))
        }
        RepeaterUnit::Weekend => {
            let ws = week_start(pivot);
            let begin = ws.add_days(6);
            Span::new(begin, begin.add_days(2))
        }
        RepeaterUnit::Fortnight => {
            let begin = fortnight_start(pivot);
            Span::new(begin, begin.add_days(14))
        }
        RepeaterUnit::Month => {
            let begin =
                Instant::from_ymd_hms(pivot.year(), pivot.month(), 1, 0, 0, 0).expect("valid month start");
            Span::new(begin, begin.add_months(1))
        }
        RepeaterUnit::MonthName(month) => {
            let begin = Instant::from_ymd_hms(pivot.year(), month, 1, 0, 0, 0).expect("valid month start");
            Span::new(begin, begin.add_months(1))
        }
        RepeaterUnit::Season(season) => {
            let year = season_year(season, pivot);
            let start_month = season_start_month(season);
            let begin = Instant::from_ymd_hms(year, start_month, 1, 0, 0, 0).expect("valid season start");
            Span::new(begin, begin.add_months(3))
        }
        RepeaterUnit::Year => {
            let begin = Instant::from_ymd_hms(pivot.year(), 1, 1, 0, 0, 0).expect("valid year start");
            Span::new(begin, begin.add_years(1))
        }
    }
}

/// Advances `instant` by `count` occurrences of `unit`, using calendar
/// arithmetic (not fixed-second multiplication) for month/year-scale
/// units so month lengths and leap years come out right. Used both by
/// [`step`] and directly by the arrow handlers' `scalar × repeater` shift.
pub fn advance(unit: RepeaterUnit, instant: Instant, count: i64) -> Instant {
    match unit {
        RepeaterUnit::Second => instant.add_seconds(count),
        RepeaterUnit::Minute => instant.add_seconds(count * 60),
        RepeaterUnit::Hour => instant.add_seconds(count * 3600),
        RepeaterUnit::Day | RepeaterUnit::Weekday | RepeaterUnit::DayPortion(_) | RepeaterUnit::Time { .. } => {
            instant.add_days(count)
        }
        RepeaterUnit::DayName(_) | RepeaterUnit::Week | RepeaterUnit::Weekend => instant.add_days(count * 7),
        RepeaterUnit::Fortnight => instant.add_days(count * 14),
        RepeaterUnit::Month => instant.add_months(count as i32),
        RepeaterUnit::MonthName(_) | RepeaterUnit::Season(_) | RepeaterUnit::Year => {
            instant.add_years(count as i32)
        }
    }
}

fn step(unit: RepeaterUnit, span: Span, count: i64) -> Span {
    Span::new(advance(unit, span.begin, count), advance(unit, span.end, count))
}

/// The first occurrence of `unit` starting at or after `pivot`... no —
/// strictly the first occurrence whose start is *after* `pivot` unless
/// this cycle's occurrence hasn't started yet, in which case this cycle's
/// occurrence itself is "next" (§3 "Repeater").
pub fn next(unit: RepeaterUnit, pivot: Instant) -> Span {
    let cur = current(unit, pivot);
    if cur.begin > pivot {
        cur
    } else {
        step(unit, cur, 1)
    }
}

/// The occurrence of `unit` immediately before this cycle's.
pub fn previous(unit: RepeaterUnit, pivot: Instant) -> Span {
    let cur = current(unit, pivot);
    step(unit, cur, -1)
}

/// The nearest occurrence of `unit` that has already started at or before
/// `pivot`: this cycle's occurrence if it has already begun, otherwise
/// the previous cycle's. Used to break the "context bias" tie for a bare
/// repeater with no grabber (§4.4) in the `past`/`none` direction,
/// mirroring how [`next`] already breaks the same tie for `future`.
pub fn nearest_past(unit: RepeaterUnit, pivot: Instant) -> Span {
    let cur = current(unit, pivot);
    if cur.begin <= pivot { cur } else { previous(unit, pivot) }
}
