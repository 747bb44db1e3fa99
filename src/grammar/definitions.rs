//! The pattern-list catalogue (§4.3): `date`, `endian`, `anchor`, `arrow`,
//! `narrow`, plus the `"time"` sub-grammar referenced from inside `date`
//! and `anchor` patterns.
//!
//! Everything here is `'static` data — no per-call allocation needed
//! except the two-element `endian` list, which depends on
//! `endian_precedence` and is rebuilt on every call (§5: "the cached
//! definition table must be invalidated or rebuilt whenever
//! `endian_precedence` changes").

use crate::grammar::pattern::{Atom, HandlerId, Pattern};
use crate::options::Endian;
use crate::token::AtomKind::*;

pub const TIME: &[Pattern] = &[
    Pattern {
        atoms: &[Atom::Optional(SeparatorAt), Atom::Required(RepeaterTime), Atom::Optional(RepeaterDayPortion)],
        handler: HandlerId::R,
    },
    Pattern {
        atoms: &[Atom::Optional(SeparatorAt), Atom::Required(Scalar), Atom::Required(Repeater)],
        handler: HandlerId::R,
    },
];

pub const ANCHOR: &[Pattern] = &[
    Pattern {
        atoms: &[Atom::Optional(Grabber), Atom::Required(Repeater), Atom::OptionalSub("time")],
        handler: HandlerId::R,
    },
    Pattern {
        atoms: &[
            Atom::Optional(Grabber),
            Atom::Required(Repeater),
            Atom::Required(Repeater),
            Atom::OptionalSub("time"),
        ],
        handler: HandlerId::RGR,
    },
];

pub const ARROW: &[Pattern] = &[
    Pattern {
        atoms: &[Atom::Required(Scalar), Atom::Required(Repeater), Atom::Required(Pointer), Atom::Sub("anchor")],
        handler: HandlerId::SRPA,
    },
    Pattern {
        atoms: &[Atom::Required(Scalar), Atom::Required(Repeater), Atom::Required(Pointer)],
        handler: HandlerId::SRP,
    },
    Pattern {
        atoms: &[Atom::Required(Pointer), Atom::Required(Scalar), Atom::Required(Repeater)],
        handler: HandlerId::PSR,
    },
];

pub const NARROW: &[Pattern] = &[
    Pattern {
        atoms: &[Atom::Required(Ordinal), Atom::Required(Repeater), Atom::Required(SeparatorIn), Atom::Required(Repeater)],
        handler: HandlerId::ORSR,
    },
    Pattern {
        atoms: &[Atom::Required(Ordinal), Atom::Required(Repeater), Atom::Required(Grabber), Atom::Required(Repeater)],
        handler: HandlerId::ORGR,
    },
];

pub const DATE: &[Pattern] = &[
    Pattern {
        atoms: &[
            Atom::Required(RepeaterMonthName),
            Atom::Required(Scalar),
            Atom::Optional(Scalar),
            Atom::OptionalSub("time"),
        ],
        handler: HandlerId::DateMonthNameDayYear,
    },
    Pattern {
        atoms: &[
            Atom::Required(Scalar),
            Atom::Required(RepeaterMonthName),
            Atom::Optional(Scalar),
            Atom::OptionalSub("time"),
        ],
        handler: HandlerId::DateDayMonthNameYear,
    },
    Pattern {
        atoms: &[
            Atom::Required(Scalar),
            Atom::Required(SeparatorSlashOrDash),
            Atom::Required(Scalar),
            Atom::Required(SeparatorSlashOrDash),
            Atom::Required(Scalar),
            Atom::OptionalSub("time"),
        ],
        handler: HandlerId::DateIsoYearMonthDay,
    },
];

/// The two mutually exclusive `A/B/C` numeric patterns, in the order
/// `endian_precedence` dictates (§4.3).
pub fn endian(precedence: &[Endian]) -> Vec<Pattern> {
    let slash_pattern = |handler: HandlerId| Pattern {
        atoms: &[
            Atom::Required(Scalar),
            Atom::Required(SeparatorSlashOrDash),
            Atom::Required(Scalar),
            Atom::Required(SeparatorSlashOrDash),
            Atom::Required(Scalar),
            Atom::OptionalSub("time"),
        ],
        handler,
    };
    let middle = slash_pattern(HandlerId::DateMdySlash);
    let little = slash_pattern(HandlerId::DateDmySlash);

    match precedence.first() {
        Some(Endian::Little) => vec![little, middle],
        _ => vec![middle, little],
    }
}

/// Resolves a named sub-grammar atom to its pattern list. `"anchor"` is
/// the same list the top-level matcher tries in its own pass.
pub fn sub_grammar(name: &str) -> &'static [Pattern] {
    match name {
        "time" => TIME,
        "anchor" => ANCHOR,
        other => panic!("unknown sub-grammar `{other}`"),
    }
}
