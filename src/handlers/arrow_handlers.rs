//! `handle_s_r_p`, `handle_p_s_r`, `handle_s_r_p_a` — the ARROW list
//! (§4.4 "scalar x repeater x pointer"): "3 weeks ago", "in 3 weeks",
//! "3 weeks from now", with `handle_s_r_p_a` additionally re-anchoring
//! the shift to an `"anchor"` sub-grammar span instead of `now`.

use crate::grammar::parse_tokens;
use crate::handlers::util::{first_pointer, repeater_units, scalars, split_after_nth_repeater};
use crate::options::Options;
use crate::repeater;
use crate::token::{Pointer, Token};
use crate::types::Span;

fn signed_count(scalar: i64, pointer: Pointer) -> i64 {
    match pointer {
        Pointer::Future => scalar,
        Pointer::Past => -scalar,
    }
}

fn shift(unit: crate::token::RepeaterUnit, base: Span, count: i64) -> Option<Span> {
    let begin = repeater::advance(unit, base.begin, count);
    let end = repeater::advance(unit, base.end, count);
    Span::try_new(begin, end)
}

/// `scalar repeater pointer`: "3 weeks ago", "3 weeks from now".
pub fn handle_s_r_p(tokens: &[Token], options: &Options) -> Option<Span> {
    let (head, _) = split_after_nth_repeater(tokens, 1);
    let scalar = *scalars(head).first()?;
    let unit = *repeater_units(head).first()?;
    let pointer = first_pointer(tokens)?;
    let pivot = options.reference_instant();
    let base = repeater::current(unit, pivot);
    shift(unit, base, signed_count(scalar, pointer))
}

/// `pointer scalar repeater`: "in 3 weeks".
pub fn handle_p_s_r(tokens: &[Token], options: &Options) -> Option<Span> {
    let pointer = first_pointer(tokens)?;
    let (head, _) = split_after_nth_repeater(tokens, 1);
    let scalar = *scalars(head).first()?;
    let unit = *repeater_units(head).first()?;
    let pivot = options.reference_instant();
    let base = repeater::current(unit, pivot);
    shift(unit, base, signed_count(scalar, pointer))
}

/// `scalar repeater pointer anchor`: "3 weeks before next month",
/// re-anchored to the nested `"anchor"` sub-grammar's span instead of
/// `now`.
pub fn handle_s_r_p_a(tokens: &[Token], options: &Options) -> Option<Span> {
    let (head, tail) = split_after_nth_repeater(tokens, 1);
    let scalar = *scalars(head).first()?;
    let unit = *repeater_units(head).first()?;
    let pointer_at = tail.iter().position(|t| t.has(crate::token::AtomKind::Pointer))?;
    let pointer = first_pointer(&tail[pointer_at..=pointer_at])?;
    let anchor = parse_tokens(&tail[pointer_at + 1..], options)?;
    shift(unit, anchor, signed_count(scalar, pointer))
}
