//! The Ordinal tagger (§4.2 "Ordinal"): `Nst | Nnd | Nrd | Nth`. Every
//! ordinal in this grammar names a day-of-month or an Nth occurrence, both
//! positionally a "day" role, so the subtype is always `Day`.

use crate::token::{OrdinalSubtype, Tag, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(st|nd|rd|th)$").unwrap());

pub fn tag(token: &mut Token) {
    let Some(caps) = ORDINAL.captures(&token.word) else { return };
    let value: i64 = caps[1].parse().unwrap();
    token.push_tag(Tag::Ordinal { value, subtype: OrdinalSubtype::Day });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_ordinal_forms() {
        for word in ["1st", "2nd", "3rd", "4th", "21st"] {
            let mut t = Token::new(word);
            tag(&mut t);
            assert!(t.is_tagged(), "expected {word} to be tagged");
        }
    }

    #[test]
    fn leaves_plain_scalar_untagged() {
        let mut t = Token::new("3");
        tag(&mut t);
        assert!(!t.is_tagged());
    }
}
