//! The TimeZone tagger (§4.2 "TimeZone"): named zone abbreviations and the
//! `tzminusDDDD`/`tzplusDDDD` offset forms the normalizer produces from a
//! trailing `" -DDDD"` (§4.1 step 3).
//!
//! A bare `[a-z]{3,}` regex would swallow ordinary words, so this tagger
//! matches against a closed whitelist of real abbreviations instead, the
//! same shape as a finite lexical table elsewhere in this pipeline.

use crate::token::{Tag, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static ZONE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "utc", "gmt", "z",
        "est", "edt", "cst", "cdt", "mst", "mdt", "pst", "pdt",
        "akst", "akdt", "hst", "hast", "hadt",
        "ast", "adt", "nst", "ndt",
        "bst", "wet", "west", "cet", "cest", "eet", "eest",
        "jst", "kst", "ist", "msk", "aest", "aedt", "acst", "acdt", "awst",
        "nzst", "nzdt",
    ])
});

static OFFSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^tz(minus|plus)(\d{4})$").unwrap());

pub fn tag(token: &mut Token) {
    let word = token.word.as_str();

    if ZONE_WORDS.contains(word) {
        token.push_tag(Tag::TimeZone(word.to_string()));
        return;
    }

    if OFFSET.is_match(word) {
        token.push_tag(Tag::TimeZone(word.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_known_abbreviation() {
        let mut t = Token::new("est");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::TimeZone("est".to_string())]);
    }

    #[test]
    fn tags_normalized_negative_offset() {
        let mut t = Token::new("tzminus0500");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::TimeZone("tzminus0500".to_string())]);
    }

    #[test]
    fn ignores_ordinary_words() {
        let mut t = Token::new("next");
        tag(&mut t);
        assert!(!t.is_tagged());
    }
}
