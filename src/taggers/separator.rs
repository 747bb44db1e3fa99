//! The Separator tagger (§4.2 "Separator"): `/`, `-`, `@`, `,`, and the
//! words `on`, `in`, `at`. Separators are filtered out of a matched pattern
//! per-grammar-list before the handler runs (§4.3).

use crate::token::{SeparatorKind, Tag, Token};

pub fn tag(token: &mut Token) {
    let kind = match token.word.as_str() {
        "/" | "-" => SeparatorKind::SlashOrDash,
        "@" | "at" => SeparatorKind::At,
        "," => SeparatorKind::Comma,
        "in" => SeparatorKind::In,
        "on" => SeparatorKind::On,
        _ => return,
    };
    token.push_tag(Tag::Separator(kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_symbolic_separators() {
        for (word, kind) in [("/", SeparatorKind::SlashOrDash), ("-", SeparatorKind::SlashOrDash), ("@", SeparatorKind::At)]
        {
            let mut t = Token::new(word);
            tag(&mut t);
            assert_eq!(t.tags, vec![Tag::Separator(kind)]);
        }
    }

    #[test]
    fn tags_word_separators() {
        for (word, kind) in [("on", SeparatorKind::On), ("in", SeparatorKind::In), ("at", SeparatorKind::At)] {
            let mut t = Token::new(word);
            tag(&mut t);
            assert_eq!(t.tags, vec![Tag::Separator(kind)]);
        }
    }
}
