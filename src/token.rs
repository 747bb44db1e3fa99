//! The token and tag data model (§3 "Token", "Tag kinds").
//!
//! A [`Token`] is an opaque word plus an ordered bag of [`Tag`]s. A token
//! may carry tags of several different kinds at once (e.g. "2" can be
//! both a `Scalar` and, after the ordinal tagger also runs over "2nd",
//! an `Ordinal`-tagged sibling token). Tags are modeled as a single
//! discriminated enum rather than a trait-object hierarchy, per the
//! "Tag pluralism" design note.

use chrono::Weekday;

/// The four astronomical seasons recognized by the Repeater tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// A coarse part of the day, used both as a standalone repeater unit and
/// to disambiguate AM/PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPortion {
    Am,
    Pm,
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// The closed set of repeater units (§3 "Repeater", §9 design note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeaterUnit {
    Year,
    Season(Season),
    /// The bare word "month" (as opposed to a specific `MonthName`).
    Month,
    /// A named month, 1-indexed (January = 1).
    MonthName(u32),
    Fortnight,
    Week,
    Weekend,
    Weekday,
    /// The bare word "day".
    Day,
    DayName(Weekday),
    DayPortion(DayPortion),
    Hour,
    Minute,
    Second,
    /// An explicit `HH[:MM[:SS]][am|pm]` clock time, already normalized to
    /// 24-hour fields. `24:00:00` is the end-of-day sentinel (§4.2).
    Time { hour: u32, minute: u32, second: u32 },
}

impl RepeaterUnit {
    /// Nominal width in seconds of one occurrence of this unit. Calendar
    /// units with variable length (month, year) return a representative
    /// value; handlers that need the *actual* width of a specific
    /// occurrence go through [`crate::repeater`] instead.
    pub fn nominal_width_seconds(self) -> i64 {
        const MINUTE: i64 = 60;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;
        match self {
            RepeaterUnit::Year => 365 * DAY,
            RepeaterUnit::Season(_) => 91 * DAY,
            RepeaterUnit::Month | RepeaterUnit::MonthName(_) => 30 * DAY,
            RepeaterUnit::Fortnight => 14 * DAY,
            RepeaterUnit::Week => 7 * DAY,
            RepeaterUnit::Weekend => 2 * DAY,
            RepeaterUnit::Weekday | RepeaterUnit::Day | RepeaterUnit::DayName(_) => DAY,
            RepeaterUnit::DayPortion(_) => 6 * HOUR,
            RepeaterUnit::Hour => HOUR,
            RepeaterUnit::Minute => MINUTE,
            RepeaterUnit::Second => 1,
            RepeaterUnit::Time { .. } => 1,
        }
    }
}

/// Selects which occurrence of a repeater (§3 "Grabber").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grabber {
    This,
    Next,
    Last,
}

/// Direction for arrow expressions (§3 "Pointer").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    Past,
    Future,
}

/// Which positional role a bare integer is later resolved to; inferred
/// from magnitude by the Scalar tagger, refined by handler position
/// (§4.2 "Scalar").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSubtype {
    Generic,
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrdinalSubtype {
    Generic,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    Comma,
    SlashOrDash,
    At,
    In,
    On,
}

/// A single typed tag attached to a token (§3 "Tag kinds").
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Repeater(RepeaterUnit),
    Grabber(Grabber),
    Pointer(Pointer),
    Scalar { value: i64, subtype: ScalarSubtype },
    Ordinal { value: i64, subtype: OrdinalSubtype },
    Separator(SeparatorKind),
    TimeZone(String),
}

/// The atom vocabulary the grammar matcher's pattern definitions are
/// written against (§9 "pattern-atom language"). Deliberately coarser in
/// places than `Tag` itself — e.g. `AtomKind::Scalar` matches a scalar of
/// any subtype, since the grammar positions, not the tagger, resolve
/// which subtype a given scalar plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// Any `repeater_*` tag.
    Repeater,
    RepeaterMonthName,
    RepeaterDayName,
    RepeaterDayPortion,
    RepeaterSeason,
    /// An explicit clock time (`repeater_time`).
    RepeaterTime,
    Grabber,
    Pointer,
    Scalar,
    Ordinal,
    SeparatorComma,
    SeparatorSlashOrDash,
    SeparatorAt,
    SeparatorIn,
    SeparatorOn,
    TimeZone,
}

impl Tag {
    /// Whether this tag satisfies a pattern atom of the given kind.
    pub fn matches(&self, kind: AtomKind) -> bool {
        match (self, kind) {
            (Tag::Repeater(_), AtomKind::Repeater) => true,
            (Tag::Repeater(RepeaterUnit::MonthName(_)), AtomKind::RepeaterMonthName) => true,
            (Tag::Repeater(RepeaterUnit::DayName(_)), AtomKind::RepeaterDayName) => true,
            (Tag::Repeater(RepeaterUnit::DayPortion(_)), AtomKind::RepeaterDayPortion) => true,
            (Tag::Repeater(RepeaterUnit::Season(_)), AtomKind::RepeaterSeason) => true,
            (Tag::Repeater(RepeaterUnit::Time { .. }), AtomKind::RepeaterTime) => true,
            (Tag::Grabber(_), AtomKind::Grabber) => true,
            (Tag::Pointer(_), AtomKind::Pointer) => true,
            (Tag::Scalar { .. }, AtomKind::Scalar) => true,
            (Tag::Ordinal { .. }, AtomKind::Ordinal) => true,
            (Tag::Separator(SeparatorKind::Comma), AtomKind::SeparatorComma) => true,
            (Tag::Separator(SeparatorKind::SlashOrDash), AtomKind::SeparatorSlashOrDash) => true,
            (Tag::Separator(SeparatorKind::At), AtomKind::SeparatorAt) => true,
            (Tag::Separator(SeparatorKind::In), AtomKind::SeparatorIn) => true,
            (Tag::Separator(SeparatorKind::On), AtomKind::SeparatorOn) => true,
            (Tag::TimeZone(_), AtomKind::TimeZone) => true,
            _ => false,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Tag::Separator(_))
    }
}

/// An opaque word plus the tags the taggers attached to it (§3 "Token").
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub word: String,
    pub tags: Vec<Tag>,
}

impl Token {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into(), tags: Vec::new() }
    }

    pub fn push_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    /// The first tag satisfying `kind`, in tagger-assignment order. The
    /// matcher uses this when a token carries several tags that could
    /// each satisfy a required atom.
    pub fn first_matching(&self, kind: AtomKind) -> Option<&Tag> {
        self.tags.iter().find(|t| t.matches(kind))
    }

    pub fn has(&self, kind: AtomKind) -> bool {
        self.first_matching(kind).is_some()
    }

    pub fn is_separator(&self) -> bool {
        self.tags.iter().any(Tag::is_separator)
    }
}

/// Splits normalized text on ASCII whitespace into untagged tokens
/// (§4.2). Tagging happens in a separate pass (see [`crate::taggers`]).
pub fn tokenize(normalized: &str) -> Vec<Token> {
    normalized.split_whitespace().map(Token::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokens = tokenize("next  month monday");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].word, "next");
        assert_eq!(tokens[2].word, "monday");
        assert!(!tokens[0].is_tagged());
    }

    #[test]
    fn scalar_tag_matches_generic_scalar_atom_regardless_of_subtype() {
        let tag = Tag::Scalar { value: 2011, subtype: ScalarSubtype::Year };
        assert!(tag.matches(AtomKind::Scalar));
        assert!(!tag.matches(AtomKind::Ordinal));
    }

    #[test]
    fn month_name_repeater_matches_both_generic_and_specific_atoms() {
        let tag = Tag::Repeater(RepeaterUnit::MonthName(3));
        assert!(tag.matches(AtomKind::Repeater));
        assert!(tag.matches(AtomKind::RepeaterMonthName));
        assert!(!tag.matches(AtomKind::RepeaterDayName));
    }
}
