//! Textual normalization (§4.1): a fixed, ordered sequence of rewrites that
//! produces the canonical lowercased form the tokenizer and taggers
//! operate on. Order matters — later rules depend on earlier ones having
//! already run.

use crate::numerizer::numerize;
use once_cell::sync::Lazy;
use regex::Regex;

static SECOND_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsecond (of|day|month|hour|minute|second)\b").unwrap());

static NEGATIVE_TZ: Lazy<Regex> = Lazy::new(|| Regex::new(r" -(\d{4})\b").unwrap());

static LEADING_ZERO_CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0(\d):(\d{2})\s*(am|pm)\b").unwrap());

static TODAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btoday\b").unwrap());
static TOMORROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:tomorrow|tommorrow|tomorow|tommorow)\b").unwrap());
static YESTERDAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\byesterday\b").unwrap());
static NOON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bnoon\b").unwrap());
static MIDNIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmidnight\b").unwrap());
static BEFORE_NOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bbefore now\b").unwrap());
static NOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bnow\b").unwrap());
static AGO_BEFORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:ago|before)\b").unwrap());
static THIS_PAST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bthis past\b").unwrap());
static THIS_LAST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bthis last\b").unwrap());
static IN_DURING_MORNING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:in|during) the morning\b").unwrap());
static DAY_PORTION_PREP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:in the|during the|at) (afternoon|evening|night)\b").unwrap());
static TONIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btonight\b").unwrap());
static FUTURE_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:hence|after|from)\b").unwrap());

static COMPACT_AM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2}(?::\d{2})?)a\b").unwrap());
static COMPACT_PM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2}(?::\d{2})?)p\b").unwrap());
static DIGIT_MERIDIAN_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)(am|pm|oclock)\b").unwrap());

/// Runs the full ordered rewrite pipeline from §4.1 over `text`, producing
/// the canonical form the tokenizer splits on whitespace.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` (§8).
pub fn normalize(text: &str) -> String {
    let s = text.to_lowercase();
    let s = strip_punctuation(&s);
    let s = SECOND_ORDINAL.replace_all(&s, "2nd $1").into_owned();
    let s = numerize(&s);
    let s = NEGATIVE_TZ.replace_all(&s, " tzminus$1").into_owned();
    let s = insert_separator_spaces(&s);
    let s = LEADING_ZERO_CLOCK.replace_all(&s, "$1:$2 $3").into_owned();
    let s = apply_word_substitutions(&s);
    let s = normalize_compact_meridian(&s);

    // Collapse whitespace runs introduced by the rewrites above so the
    // tokenizer's plain `split_whitespace` sees single-space-separated
    // words.
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_punctuation(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\'' | '"' | '.' | ',')).collect()
}

fn insert_separator_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if matches!(c, '/' | '-' | ',' | '@') {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

fn apply_word_substitutions(s: &str) -> String {
    let s = TODAY.replace_all(s, "this day").into_owned();
    let s = TOMORROW.replace_all(&s, "next day").into_owned();
    let s = YESTERDAY.replace_all(&s, "last day").into_owned();
    let s = NOON.replace_all(&s, "12:00").into_owned();
    let s = MIDNIGHT.replace_all(&s, "24:00").into_owned();
    let s = BEFORE_NOW.replace_all(&s, "past").into_owned();
    let s = NOW.replace_all(&s, "this second").into_owned();
    let s = AGO_BEFORE.replace_all(&s, "past").into_owned();
    let s = THIS_PAST.replace_all(&s, "last").into_owned();
    let s = THIS_LAST.replace_all(&s, "last").into_owned();
    let s = IN_DURING_MORNING.replace_all(&s, "morning").into_owned();
    let s = DAY_PORTION_PREP.replace_all(&s, "$1").into_owned();
    let s = TONIGHT.replace_all(&s, "this night").into_owned();
    FUTURE_WORDS.replace_all(&s, "future").into_owned()
}

fn normalize_compact_meridian(s: &str) -> String {
    let s = COMPACT_AM.replace_all(s, "${1}am").into_owned();
    let s = COMPACT_PM.replace_all(&s, "${1}pm").into_owned();
    DIGIT_MERIDIAN_SPACE.replace_all(&s, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Don't Wait."), "dont wait");
    }

    #[test]
    fn today_tomorrow_yesterday() {
        assert_eq!(normalize("today"), "this day");
        assert_eq!(normalize("tomorrow"), "next day");
        assert_eq!(normalize("tommorow"), "next day");
        assert_eq!(normalize("yesterday"), "last day");
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(normalize("noon"), "12:00");
        assert_eq!(normalize("midnight"), "24:00");
    }

    #[test]
    fn now_and_ago() {
        assert_eq!(normalize("now"), "this second");
        assert_eq!(normalize("3 days ago"), "3 days past");
        assert_eq!(normalize("before now"), "past");
    }

    #[test]
    fn from_and_hence_become_future() {
        assert_eq!(normalize("3 weeks from now"), "3 weeks future this second");
        assert_eq!(normalize("2 hours hence"), "2 hours future");
    }

    #[test]
    fn slash_and_dash_get_spaced() {
        assert_eq!(normalize("03/04/2011"), "03 / 04 / 2011");
    }

    #[test]
    fn compact_meridian_gets_spaced() {
        assert_eq!(normalize("7pm"), "7 pm");
        assert_eq!(normalize("7p"), "7 pm");
        assert_eq!(normalize("7:30a"), "7:30 am");
    }

    #[test]
    fn ordinal_second_is_disambiguated_before_numerizing() {
        assert_eq!(normalize("second of march"), "2nd of march");
        assert_eq!(normalize("wait a second"), "wait a second");
    }

    #[test]
    fn idempotent() {
        for input in ["tomorrow at 7pm", "3 weeks from now", "03/04/2011", "3rd week in march"] {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
