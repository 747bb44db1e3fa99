//! The pattern-atom language (§9 "Dynamic dispatch on handler names"): a
//! small discriminated enum instead of the source's `:kind`/`:kind?`/
//! `"sub-grammar"` string mini-language.

use crate::token::AtomKind;

/// One position in a [`Pattern`]'s atom sequence.
#[derive(Debug, Clone, Copy)]
pub enum Atom {
    /// Matches exactly one token bearing a tag of this kind.
    Required(AtomKind),
    /// Matches zero or one such token. Greedy: a match attempt prefers
    /// consuming a token when one is available and the remainder of the
    /// pattern still succeeds; it falls back to consuming none only if
    /// that is the sole way to consume every token.
    Optional(AtomKind),
    /// Matches if the *entire remaining* token slice matches some pattern
    /// in the named sub-grammar's list. Always the last atom in practice.
    Sub(&'static str),
    /// Matches if the remaining tokens are empty, or if they entirely
    /// match some pattern in the named sub-grammar's list. Models an
    /// optional trailing sub-grammar (e.g. an optional time-of-day after
    /// a bare date) without conflating it with a single optional tag atom.
    OptionalSub(&'static str),
}

/// The handler families named in §4.4, represented as a closed tagged
/// variant rather than dispatch-by-symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerId {
    /// `handle_r` — grabber? + repeater.
    R,
    /// `handle_r_g_r` — outer repeater, grabber, inner repeater.
    RGR,
    /// `handle_s_r_p` — scalar + repeater + pointer.
    SRP,
    /// `handle_p_s_r` — pointer + scalar + repeater.
    PSR,
    /// `handle_s_r_p_a` — scalar + repeater + pointer + anchor.
    SRPA,
    /// `handle_o_r_s_r` — ordinal + repeater + separator + repeater.
    ORSR,
    /// `handle_o_r_g_r` — ordinal + repeater + grabber + repeater.
    ORGR,
    /// Month-name-first explicit date (`"november 15 2006"`).
    DateMonthNameDayYear,
    /// Day-first explicit date with a month name (`"15 november 2006"`).
    DateDayMonthNameYear,
    /// `YYYY-MM-DD`-shaped numeric date, recognized by the leading
    /// scalar's year-range magnitude rather than by pattern shape alone
    /// (its atom shape is identical to the endian patterns').
    DateIsoYearMonthDay,
    /// `M/D/Y`, numeric, month-first.
    DateMdySlash,
    /// `D/M/Y`, numeric, day-first.
    DateDmySlash,
}

/// One production: an atom sequence paired with the handler that
/// interprets a successful match.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub atoms: &'static [Atom],
    pub handler: HandlerId,
}
