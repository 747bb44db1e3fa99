//! The tagging pass (§4.2): runs the seven taggers over each token, in the
//! fixed order Repeater, Grabber, Pointer, Scalar, Ordinal, Separator,
//! TimeZone, then drops every token that still carries no tag.
//!
//! Order matters only in that later taggers can add a *second* tag to a
//! token an earlier one already tagged (e.g. a word could in principle
//! satisfy both a unit name and a separator check); none of the seven
//! currently overlap on the same word, but the fixed order is still the
//! contract future taggers must respect.

mod grabber;
mod ordinal;
mod pointer;
mod repeater;
mod scalar;
mod separator;
mod time_zone;

use crate::token::Token;

/// Tags every token in place, then discards untagged ones. Word order
/// among the remaining tokens is preserved — the grammar matcher depends
/// on it.
pub fn run(tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens = tokens;
    for token in &mut tokens {
        repeater::tag(token);
        grabber::tag(token);
        pointer::tag(token);
        scalar::tag(token);
        ordinal::tag(token);
        separator::tag(token);
        time_zone::tag(token);
    }
    tokens.retain(Token::is_tagged);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{tokenize, AtomKind};

    #[test]
    fn drops_untagged_tokens() {
        let tokens = tokenize("the next monday");
        let tagged = run(tokens);
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["next", "monday"]);
    }

    #[test]
    fn tags_full_arrow_expression() {
        let tokens = tokenize("3 weeks future this second");
        let tagged = run(tokens);
        assert_eq!(tagged.len(), 5);
        assert!(tagged[0].has(AtomKind::Scalar));
        assert!(tagged[1].has(AtomKind::Repeater));
        assert!(tagged[2].has(AtomKind::Pointer));
        assert!(tagged[3].has(AtomKind::Grabber));
        assert!(tagged[4].has(AtomKind::Repeater));
    }

    #[test]
    fn tags_date_expression_with_separators() {
        let tokens = tokenize("03 / 04 / 2011");
        let tagged = run(tokens);
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["03", "/", "04", "/", "2011"]);
        assert!(tagged[1].is_separator());
        assert!(tagged[3].is_separator());
    }
}
