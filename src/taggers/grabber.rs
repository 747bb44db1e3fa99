//! The Grabber tagger (§4.2 "Grabber"): `this | next | last`.

use crate::token::{Grabber, Tag, Token};

pub fn tag(token: &mut Token) {
    let grabber = match token.word.as_str() {
        "this" => Grabber::This,
        "next" => Grabber::Next,
        "last" => Grabber::Last,
        _ => return,
    };
    token.push_tag(Tag::Grabber(grabber));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_all_three_grabbers() {
        for (word, expected) in [("this", Grabber::This), ("next", Grabber::Next), ("last", Grabber::Last)] {
            let mut t = Token::new(word);
            tag(&mut t);
            assert_eq!(t.tags, vec![Tag::Grabber(expected)]);
        }
    }

    #[test]
    fn leaves_other_words_untagged() {
        let mut t = Token::new("monday");
        tag(&mut t);
        assert!(!t.is_tagged());
    }
}
