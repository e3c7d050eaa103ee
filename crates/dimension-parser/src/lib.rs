//! Imperial length parser
//!
//! Turns free-form feet/inches text (`6'-9 1/4"`, `5 ft 10 in`, `7 3/4`,
//! `10"`) into whole millimeters. Input is normalized first, then matched
//! against the notations of [`ImperialFormat::PRIORITY`] in order.

pub mod error;
pub mod formats;
pub mod normalize;

pub use error::ParseError;
pub use formats::{match_format, Fraction, ImperialFormat, ImperialMeasure, MM_PER_INCH};
pub use normalize::normalize;

/// Result of a successful parse, with the intermediate steps
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLength {
    pub normalized: String,
    pub format: ImperialFormat,
    pub measure: ImperialMeasure,
    pub millimeters: u32,
}

/// Parse and keep the normalized text and the notation that matched
pub fn parse_detailed(raw: &str) -> Result<ParsedLength, ParseError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let (format, measure) =
        match_format(&normalized).ok_or_else(|| ParseError::Unrecognized(raw.to_string()))?;
    let measure = measure?;
    let millimeters = measure.to_millimeters()?;

    tracing::trace!(raw, %normalized, %format, millimeters, "parsed imperial length");

    Ok(ParsedLength {
        normalized,
        format,
        measure,
        millimeters,
    })
}

/// Parse an imperial length into whole millimeters
///
/// # Examples
/// ```
/// use dimension_parser::parse_imperial_length;
///
/// assert_eq!(parse_imperial_length("10\""), Ok(254));
/// assert_eq!(parse_imperial_length("6'-9 1/4"), Ok(2064));
/// assert!(parse_imperial_length("").is_err());
/// ```
pub fn parse_imperial_length(raw: &str) -> Result<u32, ParseError> {
    parse_detailed(raw).map(|parsed| parsed.millimeters)
}

/// Parse a possibly-absent field; absence is [`ParseError::Empty`]
pub fn parse_optional(raw: Option<&str>) -> Result<u32, ParseError> {
    raw.map_or(Err(ParseError::Empty), parse_imperial_length)
}

/// Which notation `raw` is written in, if any
pub fn detect_format(raw: &str) -> Option<ImperialFormat> {
    match_format(&normalize(raw)).map(|(format, _)| format)
}
