//! Shared tag-scanning helpers. Handlers resolve a matched token's role by
//! scanning for the tag kind they need rather than by fixed position,
//! since optional atoms mean a given role may or may not occupy a fixed
//! index (§4.2 "downstream handlers resolve subtype from position").

use crate::token::{AtomKind, Grabber, OrdinalSubtype, Pointer, RepeaterUnit, ScalarSubtype, Tag, Token};

pub fn first_grabber(tokens: &[Token]) -> Option<Grabber> {
    tokens.iter().find_map(|t| t.tags.iter().find_map(|tag| match tag {
        Tag::Grabber(g) => Some(*g),
        _ => None,
    }))
}

pub fn first_pointer(tokens: &[Token]) -> Option<Pointer> {
    tokens.iter().find_map(|t| t.tags.iter().find_map(|tag| match tag {
        Tag::Pointer(p) => Some(*p),
        _ => None,
    }))
}

pub fn first_ordinal(tokens: &[Token]) -> Option<(i64, OrdinalSubtype)> {
    tokens.iter().find_map(|t| t.tags.iter().find_map(|tag| match tag {
        Tag::Ordinal { value, subtype } => Some((*value, *subtype)),
        _ => None,
    }))
}

/// All scalar values in token order, ignoring subtype.
pub fn scalars(tokens: &[Token]) -> Vec<i64> {
    tokens
        .iter()
        .filter_map(|t| {
            t.tags.iter().find_map(|tag| match tag {
                Tag::Scalar { value, .. } => Some(*value),
                _ => None,
            })
        })
        .collect()
}

pub fn scalars_with_subtype(tokens: &[Token]) -> Vec<(i64, ScalarSubtype)> {
    tokens
        .iter()
        .filter_map(|t| {
            t.tags.iter().find_map(|tag| match tag {
                Tag::Scalar { value, subtype } => Some((*value, *subtype)),
                _ => None,
            })
        })
        .collect()
}

/// All repeater units in token order.
pub fn repeater_units(tokens: &[Token]) -> Vec<RepeaterUnit> {
    tokens
        .iter()
        .filter(|t| t.has(AtomKind::Repeater))
        .filter_map(|t| {
            t.tags.iter().find_map(|tag| match tag {
                Tag::Repeater(unit) => Some(*unit),
                _ => None,
            })
        })
        .collect()
}

/// Splits `tokens` right after the `n`-th repeater-tagged token (1-indexed),
/// returning `(head, tail)`. `tail` is empty if fewer than `n` repeater
/// tokens are present.
pub fn split_after_nth_repeater(tokens: &[Token], n: usize) -> (&[Token], &[Token]) {
    let mut seen = 0;
    for (i, t) in tokens.iter().enumerate() {
        if t.has(AtomKind::Repeater) {
            seen += 1;
            if seen == n {
                return (&tokens[..=i], &tokens[i + 1..]);
            }
        }
    }
    (tokens, &[])
}
