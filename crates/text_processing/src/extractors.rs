//! Field extractors
//!
//! Each extractor scans a normalized utterance for one field using an
//! anchored pattern: a unit word or connector directly next to a digit run.
//! Words around the anchor can appear in any order, but the anchor itself
//! is required. Every extractor returns `None` when the field is missing or
//! its value does not fit.
//!
//! Patterns are compiled once, on first use.

use kayan_config::constants::scale::{MILLION, MILLION_DECIMALS};
use kayan_config::MagnitudePolicy;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numerals::{
    extract_numbers, parse_digit_run, parse_small, word_to_number, DIGIT, NUMERAL_TABLE,
};
use crate::utterance::Utterance;
use crate::vocabulary::MILLION_MARKERS;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Digits followed by a unit: "110م", "110 متر", "120 sqm". The unit must
/// end on a word boundary so "2 مليون" is not 2 meters.
static AREA_UNIT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"({d}+)\s*(?:متر|م|sqm|meters?|m)(?:2|²)?\b",
        d = DIGIT
    ))
});

/// Area word followed by digits: "مساحة 120"
static STATED_AREA: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?:المساحة|مساحة|area)\s*({d}+)", d = DIGIT)));

/// "الدور 10", "دور 5", "floor 3"
static FLOOR: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?:الدور|دور|floor)\s*({d}+)", d = DIGIT)));

/// "2 غرفة", "3 غرف", "2 bedrooms"
static BEDROOMS: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"({d}+)\s*(?:غرفة|غرف|bedrooms?|rooms?)",
        d = DIGIT
    ))
});

/// "1 حمام", "2 حمامات", "2 bathrooms"
static BATHROOMS: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"({d}+)\s*(?:حمامات|حمام|bathrooms?|baths?)",
        d = DIGIT
    ))
});

/// Price connector followed by an amount: "لـ 2000000", "السعر 2,000,000", "يبقى 1500000"
static PRICE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?:لـ|السعر|يبقى|price)\s*({d}+(?:[,٬]{d}+)*)",
        d = DIGIT
    ))
});

/// "سعر المتر 16000", "المتر 16000", "price per meter 16000"
static PRICE_PER_METER: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?:سعر المتر|المتر|price per meter|per meter)\s*({d}+)",
        d = DIGIT
    ))
});

/// "اقل من 2", "less than 3"
static LESS_THAN: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?:اقل من|أقل من|less than)\s*({d}+)", d = DIGIT)));

/// "اكتر من 1", "more than 1"
static MORE_THAN: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?:اكتر من|أكتر من|more than|greater than)\s*({d}+)",
        d = DIGIT
    ))
});

/// A number written directly before the million word: "2 مليون",
/// "1.5 million", "اتنين مليون"
static ADJACENT_MILLION: Lazy<Regex> = Lazy::new(|| {
    // Longest words first so "عشرين" is not read as "عشر"
    let mut words: Vec<&str> = NUMERAL_TABLE.iter().map(|(word, _)| *word).collect();
    words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    let words = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    let markers = MILLION_MARKERS
        .iter()
        .map(|marker| regex::escape(marker))
        .collect::<Vec<_>>()
        .join("|");

    compile(&format!(
        r"(?:({d}+)(?:[.٫]({d}+))?|({words}))\s*(?:{markers})",
        d = DIGIT,
        words = words,
        markers = markers
    ))
});

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Area from a unit suffix ("110م")
pub fn extract_area(text: &Utterance) -> Option<u32> {
    capture(&AREA_UNIT, text.as_str()).and_then(parse_small)
}

/// Area from an area word ("مساحة 120")
pub fn extract_stated_area(text: &Utterance) -> Option<u32> {
    capture(&STATED_AREA, text.as_str()).and_then(parse_small)
}

pub fn extract_floor(text: &Utterance) -> Option<u32> {
    capture(&FLOOR, text.as_str()).and_then(parse_small)
}

pub fn extract_bedrooms(text: &Utterance) -> Option<u32> {
    capture(&BEDROOMS, text.as_str()).and_then(parse_small)
}

pub fn extract_bathrooms(text: &Utterance) -> Option<u32> {
    capture(&BATHROOMS, text.as_str()).and_then(parse_small)
}

/// Price after a connector, thousands separators stripped
pub fn extract_price(text: &Utterance) -> Option<u64> {
    capture(&PRICE, text.as_str()).and_then(parse_digit_run)
}

pub fn extract_price_per_meter(text: &Utterance) -> Option<u64> {
    capture(&PRICE_PER_METER, text.as_str()).and_then(parse_digit_run)
}

pub fn has_million_marker(text: &Utterance) -> bool {
    text.contains_any(MILLION_MARKERS)
}

/// Re-derive `price` when the utterance contains a million word.
///
/// Without the marker, or when the policy finds no number to scale, the
/// price is returned unchanged. A scaled value that overflows makes the
/// price absent.
pub fn extract_magnitude_adjustment(
    text: &Utterance,
    policy: MagnitudePolicy,
    price: Option<u64>,
) -> Option<u64> {
    if !has_million_marker(text) {
        return price;
    }

    let rescaled = match policy {
        MagnitudePolicy::Adjacent => adjacent_million(text.as_str()),
        MagnitudePolicy::SecondToLast => second_to_last_million(text.as_str()),
    };

    match rescaled {
        Some(value) => {
            if value.is_none() {
                tracing::debug!(?policy, "Scaled price overflows, treating price as absent");
            }
            value
        }
        None => price,
    }
}

/// `None`: nothing to scale. `Some(None)`: scaling overflowed.
fn adjacent_million(text: &str) -> Option<Option<u64>> {
    let caps = ADJACENT_MILLION.captures(text)?;

    if let Some(word) = caps.get(3) {
        return Some(word_to_number(word.as_str()).and_then(|n| n.checked_mul(MILLION)));
    }

    let whole = parse_digit_run(caps.get(1)?.as_str());
    let fraction = caps.get(2).map(|m| scale_fraction(m.as_str()));
    Some(whole.and_then(|whole| {
        let base = whole.checked_mul(MILLION)?;
        match fraction {
            Some(fraction) => base.checked_add(fraction?),
            None => Some(base),
        }
    }))
}

/// Fractional digits as millionths: "5" -> 500_000. Digits beyond the
/// sixth are dropped.
fn scale_fraction(digits: &str) -> Option<u64> {
    let kept: String = digits.chars().take(MILLION_DECIMALS as usize).collect();
    let width = kept.chars().count() as u32;
    let value = parse_digit_run(&kept)?;
    value.checked_mul(10u64.pow(MILLION_DECIMALS - width))
}

fn second_to_last_million(text: &str) -> Option<Option<u64>> {
    let numbers = extract_numbers(text);
    if numbers.len() < 2 {
        return None;
    }
    Some(numbers[numbers.len() - 2].checked_mul(MILLION))
}

/// Price bounds from "less than" / "more than" phrases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// "less than N" sets the maximum and "more than N" the minimum. Both are
/// scaled by one million if a million word appears anywhere in the text.
pub fn extract_comparison_threshold(text: &Utterance) -> PriceBounds {
    let scale = if has_million_marker(text) { MILLION } else { 1 };
    let bound = |pattern: &Regex| {
        capture(pattern, text.as_str())
            .and_then(parse_digit_run)
            .and_then(|value| value.checked_mul(scale))
    };

    PriceBounds {
        min: bound(&MORE_THAN),
        max: bound(&LESS_THAN),
    }
}
