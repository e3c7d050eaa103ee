//! Canonical spelling of free-form feet/inches text
//!
//! Steps run in a fixed order:
//! 1. Trim surrounding whitespace
//! 2. Fold apostrophe look-alikes to `'` and double-quote look-alikes to `"`
//! 3. Drop whitespace around `'`, `-`, `/` and `"`
//! 4. Collapse `'-` (feet-dash-inches) to `'`
//! 5. Split a whole number glued to a fraction (`91/4` -> `9 1/4`); a
//!    fraction that already follows whitespace is left alone

use lazy_static::lazy_static;
use regex::Regex;

/// Apostrophe, left/right single quotation marks, prime
const APOSTROPHE_LIKE: [char; 4] = ['\'', '\u{2018}', '\u{2019}', '\u{2032}'];

/// Left/right double quotation marks, double prime
const DOUBLE_QUOTE_LIKE: [char; 3] = ['\u{201C}', '\u{201D}', '\u{2033}'];

lazy_static! {
    static ref SPACED_MARK: Regex = Regex::new(r#"\s*(['/"-])\s*"#).unwrap();

    static ref APOSTROPHE_DASH: Regex = Regex::new(r"'-+").unwrap();

    /// The digit run must not follow whitespace, a digit or a decimal point,
    /// so `9 15/16` keeps its numerator. The greedy whole part leaves exactly
    /// one digit for the numerator of a glued fraction.
    static ref JOINED_FRACTION: Regex = Regex::new(r"(^|[^\s\d.])(\d+)(\d/\d+)").unwrap();
}

/// Normalize imperial length text. Idempotent.
///
/// # Examples
/// ```
/// use dimension_parser::normalize;
///
/// assert_eq!(normalize("6 ' 2"), "6'2");
/// assert_eq!(normalize("6’-9 1/4\""), "6'9 1/4\"");
/// assert_eq!(normalize("6'91/4"), "6'9 1/4");
/// ```
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .chars()
        .map(|c| {
            if APOSTROPHE_LIKE.contains(&c) {
                '\''
            } else if DOUBLE_QUOTE_LIKE.contains(&c) {
                '"'
            } else {
                c
            }
        })
        .collect();

    let tight = SPACED_MARK.replace_all(&folded, "${1}");
    let mut normalized = APOSTROPHE_DASH.replace_all(&tight, "'").into_owned();

    // Runs like "11/22/33" expose a new joined fraction after each split
    while JOINED_FRACTION.is_match(&normalized) {
        normalized = JOINED_FRACTION
            .replace_all(&normalized, "${1}${2} ${3}")
            .into_owned();
    }

    normalized
}
