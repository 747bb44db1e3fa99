//! The Pointer tagger (§4.2 "Pointer"): `past | future`. Both words only
//! exist in this form post-normalization — "ago"/"before"/"hence"/"from"
//! are rewritten to one of these by the normalizer (§4.1).

use crate::token::{Pointer, Tag, Token};

pub fn tag(token: &mut Token) {
    let pointer = match token.word.as_str() {
        "past" => Pointer::Past,
        "future" => Pointer::Future,
        _ => return,
    };
    token.push_tag(Tag::Pointer(pointer));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_past_and_future() {
        let mut past = Token::new("past");
        tag(&mut past);
        assert_eq!(past.tags, vec![Tag::Pointer(Pointer::Past)]);

        let mut future = Token::new("future");
        tag(&mut future);
        assert_eq!(future.tags, vec![Tag::Pointer(Pointer::Future)]);
    }
}
