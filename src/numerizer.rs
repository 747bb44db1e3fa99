//! Word-to-digit preprocessor ("Numerizer", §1, §4.1 step 4).
//!
//! Turns runs of English cardinal/ordinal number words into digit forms
//! (`"twenty one"` -> `"21"`, `"twenty first"` -> `"21st"`). Treated as a
//! fixed lexical table, not a general NLP component — see the module-level
//! Non-goals in `spec.md` §1.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static ONES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
    ])
});

static TEENS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
    ])
});

static TENS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ])
});

static SCALES: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| HashMap::from([("hundred", 100), ("thousand", 1000)]));

static ORDINAL_ONES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
        ("sixth", 6),
        ("seventh", 7),
        ("eighth", 8),
        ("ninth", 9),
    ])
});

static ORDINAL_TEENS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("tenth", 10),
        ("eleventh", 11),
        ("twelfth", 12),
        ("thirteenth", 13),
        ("fourteenth", 14),
        ("fifteenth", 15),
        ("sixteenth", 16),
        ("seventeenth", 17),
        ("eighteenth", 18),
        ("nineteenth", 19),
    ])
});

static ORDINAL_TENS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("twentieth", 20),
        ("thirtieth", 30),
        ("fortieth", 40),
        ("fiftieth", 50),
        ("sixtieth", 60),
        ("seventieth", 70),
        ("eightieth", 80),
        ("ninetieth", 90),
    ])
});

fn ordinal_suffix(n: u32) -> &'static str {
    let last_two = n % 100;
    if (11..=13).contains(&last_two) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// A single lexical item consumed while scanning a run of number words.
/// `-` splits hyphenated compounds like `twenty-first` into two of these
/// before the run parser ever sees them.
fn split_words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        if word.contains('-') && word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            for part in word.split('-') {
                if !part.is_empty() {
                    out.push(part.to_string());
                }
            }
        } else {
            out.push(word.to_string());
        }
    }
    out
}

/// Attempts to consume a maximal run of number words starting at `words[i]`,
/// returning the accumulated value, whether the run ended on an ordinal
/// word, and how many words were consumed. Returns `None` if `words[i]`
/// is not itself a number word.
fn parse_run(words: &[String], i: usize) -> Option<(u32, bool, usize)> {
    let mut total: u32 = 0;
    let mut current: u32 = 0;
    let mut consumed = 0;
    let mut is_ordinal = false;
    let mut matched_any = false;

    let mut j = i;
    while j < words.len() {
        let w = words[j].as_str();

        if let Some(&v) = ONES.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            j += 1;
            continue;
        }
        if let Some(&v) = TEENS.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            j += 1;
            continue;
        }
        if let Some(&v) = TENS.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            j += 1;
            continue;
        }
        if let Some(&v) = SCALES.get(w) {
            if current == 0 {
                current = 1;
            }
            current *= v;
            total += current;
            current = 0;
            consumed = j - i + 1;
            matched_any = true;
            j += 1;
            continue;
        }
        if let Some(&v) = ORDINAL_ONES.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            is_ordinal = true;
            j += 1;
            break;
        }
        if let Some(&v) = ORDINAL_TEENS.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            is_ordinal = true;
            j += 1;
            break;
        }
        if let Some(&v) = ORDINAL_TENS.get(w) {
            current += v;
            consumed = j - i + 1;
            matched_any = true;
            is_ordinal = true;
            j += 1;
            break;
        }
        break;
    }

    if !matched_any {
        return None;
    }
    total += current;
    Some((total, is_ordinal, consumed))
}

/// Replaces every maximal run of English cardinal/ordinal number words in
/// `text` with its digit form. Non-number words pass through unchanged.
/// Idempotent: re-running on already-numerized text is a no-op, since
/// digit forms are not number words.
pub fn numerize(text: &str) -> String {
    let words = split_words(text);
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        match parse_run(&words, i) {
            Some((value, is_ordinal, consumed)) if consumed > 0 => {
                if is_ordinal {
                    out.push(format!("{value}{}", ordinal_suffix(value)));
                } else {
                    out.push(value.to_string());
                }
                i += consumed;
            }
            _ => {
                out.push(words[i].clone());
                i += 1;
            }
        }
    }
    out.join(" ")
}
