//! The Scalar tagger (§4.2 "Scalar"): a pure integer, subtyped by magnitude
//! as a hint for the grammar/handlers. The subtype is only ever a hint —
//! handlers resolve a scalar's real role from its position in the matched
//! pattern, not from this field alone.

use crate::token::{ScalarSubtype, Tag, Token};

pub fn tag(token: &mut Token) {
    let Ok(value) = token.word.parse::<i64>() else { return };
    if token.word.starts_with('+') {
        // `i64::parse` accepts a leading `+`; a scalar token never carries
        // an explicit sign in this grammar (that's a separate arrow/pointer
        // concept), so reject it here to avoid misreading e.g. a stray `+3`.
        return;
    }
    let subtype = if value >= 100 {
        ScalarSubtype::Year
    } else if (1..=31).contains(&value) {
        ScalarSubtype::Day
    } else {
        ScalarSubtype::Generic
    };
    token.push_tag(Tag::Scalar { value, subtype });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integer_is_day_subtype() {
        let mut t = Token::new("15");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Scalar { value: 15, subtype: ScalarSubtype::Day }]);
    }

    #[test]
    fn large_integer_is_year_subtype() {
        let mut t = Token::new("2011");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Scalar { value: 2011, subtype: ScalarSubtype::Year }]);
    }

    #[test]
    fn mid_range_integer_is_generic() {
        let mut t = Token::new("45");
        tag(&mut t);
        assert_eq!(t.tags, vec![Tag::Scalar { value: 45, subtype: ScalarSubtype::Generic }]);
    }

    #[test]
    fn non_numeric_word_untagged() {
        let mut t = Token::new("monday");
        tag(&mut t);
        assert!(!t.is_tagged());
    }

    #[test]
    fn ordinal_form_is_not_a_scalar() {
        let mut t = Token::new("3rd");
        tag(&mut t);
        assert!(!t.is_tagged());
    }
}
