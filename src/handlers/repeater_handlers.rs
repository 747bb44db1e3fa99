//! `handle_r` and `handle_r_g_r` (§4.4 "Repeater composition").

use crate::handlers::time;
use crate::handlers::util::{first_grabber, repeater_units, split_after_nth_repeater};
use crate::options::{Context, Options};
use crate::repeater;
use crate::token::{Grabber, RepeaterUnit, Token};
use crate::types::{Instant, Span};

fn step_for_grabber(unit: RepeaterUnit, grabber: Grabber, pivot: Instant) -> Span {
    match grabber {
        Grabber::This => repeater::current(unit, pivot),
        Grabber::Next => repeater::next(unit, pivot),
        Grabber::Last => repeater::previous(unit, pivot),
    }
}

/// Narrows `span` to a single explicit moment within its day, when `tail`
/// resolves to a time-of-day via the `"time"` sub-grammar. `"24:00"` lands
/// at the start of the following day, the end-of-day sentinel (§4.2).
fn apply_time_of_day(span: Span, tail: &[Token], options: &Options) -> Option<Span> {
    let Some(t) = time::extract(tail, options.ambiguous_time_range) else { return Some(span) };
    let day = span.begin.at_start_of_day();
    if t.hour == 24 {
        let next_day = day.add_days(1);
        return Span::try_new(next_day, next_day.add_seconds(1));
    }
    let at = Instant::from_ymd_hms(day.year(), day.month(), day.day(), t.hour, t.minute, t.second)?;
    Span::try_new(at, at.add_seconds(1))
}

/// Grabber + a single repeater, optionally followed by an explicit
/// time-of-day. When no grabber token is present, the bare repeater's
/// occurrence is picked up by the `context` option rather than defaulting
/// to `this` (§4.4 "Context bias": "monday" with no grabber is resolved
/// by `context`, not pinned to the current week's occurrence).
pub fn handle_r(tokens: &[Token], options: &Options) -> Option<Span> {
    let (head, tail) = split_after_nth_repeater(tokens, 1);
    let unit = *repeater_units(head).first()?;
    let pivot = options.reference_instant();
    let span = match first_grabber(tokens) {
        Some(grabber) => step_for_grabber(unit, grabber, pivot),
        None => match options.context {
            Context::Future => repeater::next(unit, pivot),
            Context::Past | Context::None => repeater::nearest_past(unit, pivot),
        },
    };
    apply_time_of_day(span, tail, options)
}

/// Outer repeater, grabber, inner repeater: the outer repeater's stepped
/// occurrence defines a search window, and the inner repeater is the
/// first occurrence of its own unit inside that window.
pub fn handle_r_g_r(tokens: &[Token], options: &Options) -> Option<Span> {
    let grabber = first_grabber(tokens).unwrap_or(Grabber::This);
    let (head, tail) = split_after_nth_repeater(tokens, 2);
    let units = repeater_units(head);
    let (outer, inner) = (*units.first()?, *units.get(1)?);

    let pivot = options.reference_instant();
    let window = step_for_grabber(outer, grabber, pivot);

    // The first occurrence of `inner` whose start falls inside `window`,
    // searching forward from the window's start.
    let mut candidate = repeater::current(inner, window.begin);
    if candidate.begin < window.begin {
        candidate = repeater::next(inner, window.begin.add_seconds(-1));
    }
    if !window.contains(candidate.begin) {
        return None;
    }
    apply_time_of_day(candidate, tail, options)
}
