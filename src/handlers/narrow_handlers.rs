//! `handle_o_r_s_r` and `handle_o_r_g_r` — the NARROW list (§4.4 "ordinal
//! x repeater x repeater"): "3rd wednesday in november", "3rd monday this
//! month". Unlike the other lists, NARROW receives its tokens unfiltered
//! (separators included) per the per-list separator policy, but neither
//! handler needs the separator token itself, only the ordinal and the two
//! repeaters.

use crate::handlers::util::{first_grabber, first_ordinal, repeater_units};
use crate::options::Options;
use crate::repeater;
use crate::token::{Grabber, Token};
use crate::types::{Instant, Span};

/// Given an outer window and an inner unit, the `n`-th (1-indexed)
/// occurrence of `inner` whose start falls inside the window, walking
/// forward from the window's start. Returns `None` if the window runs out
/// before `n` occurrences are found (e.g. a "5th Monday" in a 4-Monday
/// month).
fn nth_occurrence_in(inner: crate::token::RepeaterUnit, window: Span, n: i64) -> Option<Span> {
    let mut candidate = repeater::current(inner, window.begin);
    if candidate.begin < window.begin {
        candidate = repeater::next(inner, window.begin.add_seconds(-1));
    }
    let mut count = 0;
    while window.contains(candidate.begin) {
        count += 1;
        if count == n {
            return Some(candidate);
        }
        candidate = repeater::next(inner, candidate.begin);
    }
    None
}

/// `ordinal repeater "in" repeater`: "3rd wednesday in november". The
/// second repeater is resolved relative to `now` to find its own
/// containing window before the ordinal narrows it.
pub fn handle_o_r_s_r(tokens: &[Token], options: &Options) -> Option<Span> {
    let (n, _) = first_ordinal(tokens)?;
    let units = repeater_units(tokens);
    let (inner, outer) = (*units.first()?, *units.get(1)?);
    let pivot = options.reference_instant();
    let window = repeater::current(outer, pivot);
    nth_occurrence_in(inner, window, n)
}

/// `ordinal repeater grabber repeater`: "3rd monday next month".
pub fn handle_o_r_g_r(tokens: &[Token], options: &Options) -> Option<Span> {
    let (n, _) = first_ordinal(tokens)?;
    let grabber = first_grabber(tokens).unwrap_or(Grabber::This);
    let units = repeater_units(tokens);
    let (inner, outer) = (*units.first()?, *units.get(1)?);
    let pivot: Instant = options.reference_instant();
    let window = match grabber {
        Grabber::This => repeater::current(outer, pivot),
        Grabber::Next => repeater::next(outer, pivot),
        Grabber::Last => repeater::previous(outer, pivot),
    };
    nth_occurrence_in(inner, window, n)
}
