//! Number normalization
//!
//! Digit runs (ASCII, Arabic-Indic and Extended Arabic-Indic) and spelled-out
//! Egyptian Arabic number words. Conversion is checked: a run that does not
//! fit is rejected rather than wrapped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character class for one digit in any accepted script
pub(crate) const DIGIT: &str = "[0-9٠-٩۰-۹]";

/// Spelled-out numbers, in lookup order.
///
/// Matching is by substring, so a longer word also matches any shorter word
/// it contains ("عشرين" yields both 20 and 10).
pub const NUMERAL_TABLE: &[(&str, u64)] = &[
    ("واحد", 1),
    ("اتنين", 2),
    ("ثلاثة", 3),
    ("اربعة", 4),
    ("خمسة", 5),
    ("ستة", 6),
    ("سبعة", 7),
    ("ثمانية", 8),
    ("تسعة", 9),
    ("عشرة", 10),
    ("عشر", 10),
    ("عشرين", 20),
    ("ثلاثين", 30),
    ("اربعين", 40),
    ("خمسين", 50),
];

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("{}+", DIGIT)).unwrap());

/// Value of a single digit character, in any accepted script
pub fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        '٠'..='٩' => Some(c as u64 - '٠' as u64),
        '۰'..='۹' => Some(c as u64 - '۰' as u64),
        _ => None,
    }
}

/// Parse a digit run, skipping `,`/`٬` thousands separators.
///
/// Returns `None` for an empty run, a non-digit character, or overflow.
pub fn parse_digit_run(run: &str) -> Option<u64> {
    let mut value: u64 = 0;
    let mut seen_digit = false;

    for c in run.chars() {
        if c == ',' || c == '٬' {
            continue;
        }
        let digit = digit_value(c)?;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => {
                tracing::debug!(run = %run, "Digit run overflows, treating field as absent");
                return None;
            }
        };
        seen_digit = true;
    }

    seen_digit.then_some(value)
}

/// Parse a digit run into a narrower field type
pub fn parse_small(run: &str) -> Option<u32> {
    let value = parse_digit_run(run)?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::debug!(value, "Value too large for field, treating field as absent");
            None
        }
    }
}

/// Value of a number word, exact match
pub fn word_to_number(word: &str) -> Option<u64> {
    NUMERAL_TABLE
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, value)| *value)
}

/// Values of every table word occurring in `text`, in table order.
///
/// Each distinct word counts once however often it repeats.
pub fn lookup_numerals(text: &str) -> Vec<u64> {
    NUMERAL_TABLE
        .iter()
        .filter(|(word, _)| text.contains(word))
        .map(|(_, value)| *value)
        .collect()
}

/// Every number in `text`: digit runs in reading order, then number words
/// in table order. Overflowing runs are skipped.
pub fn extract_numbers(text: &str) -> Vec<u64> {
    let mut numbers: Vec<u64> = DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| parse_digit_run(m.as_str()))
        .collect();
    numbers.extend(lookup_numerals(text));
    numbers
}
