//! Drives the pattern lists in order and dispatches to handlers (§4.3).

use crate::grammar::definitions;
use crate::grammar::pattern::{Atom, HandlerId, Pattern};
use crate::handlers;
use crate::options::Options;
use crate::token::{SeparatorKind, Tag, Token};
use crate::types::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListName {
    Date,
    Endian,
    Anchor,
    Arrow,
    Narrow,
}

/// Tries `date`, `endian`, `anchor`, `arrow`, `narrow` in that order
/// against the full tagged token stream, returning the first handler's
/// non-`None` result.
///
/// A recognized zone word is carried as metadata only (§4.2, SPEC_FULL.md
/// "carried as metadata, not applied as a UTC offset") — it never
/// participates in matching, so it is stripped up front rather than
/// tried against any pattern.
pub fn parse_tokens(tokens: &[Token], options: &Options) -> Option<Span> {
    let tokens: Vec<Token> = tokens.iter().filter(|t| !is_time_zone(t)).cloned().collect();
    let tokens = tokens.as_slice();
    try_list(ListName::Date, definitions::DATE, tokens, options)
        .or_else(|| {
            let endian_list = definitions::endian(&options.endian_precedence);
            try_list(ListName::Endian, &endian_list, tokens, options)
        })
        .or_else(|| try_list(ListName::Anchor, definitions::ANCHOR, tokens, options))
        .or_else(|| try_list(ListName::Arrow, definitions::ARROW, tokens, options))
        .or_else(|| try_list(ListName::Narrow, definitions::NARROW, tokens, options))
}

fn try_list(list: ListName, patterns: &[Pattern], tokens: &[Token], options: &Options) -> Option<Span> {
    for pattern in patterns {
        if matches(pattern.atoms, tokens) {
            tracing::trace!(stage = "match", list = ?list, handler = ?pattern.handler);
            let filtered = filter_for(list, tokens);
            // A handler returning `None` means "this pattern does not
            // apply after all" (e.g. Feb 30) — the matcher moves on to
            // the next pattern rather than surfacing an error (§4.4, §7).
            if let Some(span) = handlers::dispatch(pattern.handler, &filtered, options) {
                tracing::trace!(stage = "handle", list = ?list, handler = ?pattern.handler);
                return Some(span);
            }
        }
    }
    None
}

fn is_time_zone(token: &Token) -> bool {
    token.tags.iter().any(|t| matches!(t, Tag::TimeZone(_)))
}

fn should_drop(list: ListName, token: &Token) -> bool {
    match list {
        ListName::Date | ListName::Endian | ListName::Anchor => token.is_separator(),
        ListName::Arrow => token.tags.iter().any(|t| {
            matches!(
                t,
                Tag::Separator(SeparatorKind::At) | Tag::Separator(SeparatorKind::SlashOrDash) | Tag::Separator(SeparatorKind::Comma)
            )
        }),
        ListName::Narrow => false,
    }
}

fn filter_for(list: ListName, tokens: &[Token]) -> Vec<Token> {
    tokens.iter().filter(|t| !should_drop(list, t)).cloned().collect()
}

/// Whether `atoms` fully consumes `tokens` (no partial matches: §4.3
/// "the overall match must consume all tokens").
fn matches(atoms: &[Atom], tokens: &[Token]) -> bool {
    match atoms.split_first() {
        None => tokens.is_empty(),
        Some((Atom::Required(kind), rest)) => match tokens.split_first() {
            Some((head, tail)) if head.has(*kind) => matches(rest, tail),
            _ => false,
        },
        Some((Atom::Optional(kind), rest)) => {
            if let Some((head, tail)) = tokens.split_first()
                && head.has(*kind)
                && matches(rest, tail)
            {
                return true;
            }
            matches(rest, tokens)
        }
        Some((Atom::Sub(name), rest)) => {
            debug_assert!(rest.is_empty(), "a sub-grammar atom must be the last atom in its pattern");
            sub_grammar_matches(name, tokens)
        }
        Some((Atom::OptionalSub(name), rest)) => {
            debug_assert!(rest.is_empty(), "an optional sub-grammar atom must be the last atom in its pattern");
            tokens.is_empty() || sub_grammar_matches(name, tokens)
        }
    }
}

fn sub_grammar_matches(name: &str, tokens: &[Token]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    definitions::sub_grammar(name).iter().any(|p| matches(p.atoms, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::taggers;
    use crate::token::tokenize;

    fn tag_text(text: &str) -> Vec<Token> {
        taggers::run(tokenize(&normalize(text)))
    }

    #[test]
    fn anchor_matches_bare_repeater() {
        let tokens = tag_text("week");
        assert!(matches(definitions::ANCHOR[0].atoms, &tokens));
    }

    #[test]
    fn anchor_matches_grabber_plus_repeater() {
        let tokens = tag_text("next week");
        assert!(matches(definitions::ANCHOR[0].atoms, &tokens));
    }

    #[test]
    fn anchor_with_trailing_time_matches_via_sub_grammar() {
        let tokens = tag_text("last day at 4:00");
        assert!(matches(definitions::ANCHOR[0].atoms, &tokens));
    }

    #[test]
    fn endian_slash_pattern_matches_three_scalars() {
        let tokens = tag_text("03 / 04 / 2011");
        let list = definitions::endian(&[crate::options::Endian::Middle]);
        assert!(matches(list[0].atoms, &tokens));
    }

    #[test]
    fn narrow_pattern_matches_ordinal_repeater_in_repeater() {
        let tokens = tag_text("3rd wednesday in november");
        assert!(matches(definitions::NARROW[0].atoms, &tokens));
    }
}
