//! Named feet/inches notations, tried in a fixed priority order
//!
//! Every pattern runs against normalized text (see [`crate::normalize`]), so
//! there is never whitespace around `'`, `-`, `/` or `"`. The order of
//! [`ImperialFormat::PRIORITY`] decides ambiguous inputs such as `6 2`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::ParseError;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

lazy_static! {
    static ref FEET_INCHES: Regex = Regex::new(
        r#"(?i)^(?P<feet>\d+(?:\.\d+)?|\.\d+)'(?P<inches>\d+(?:\.\d+)?|\.\d+)(?:\s+(?P<num>\d+)/(?P<den>\d+))?(?:"|\s*(?:inches|inch|in)\.?)?$"#
    )
    .unwrap();

    static ref INCHES_ONLY: Regex = Regex::new(
        r#"(?i)^(?P<inches>\d+(?:\.\d+)?|\.\d+)(?:"|\s*(?:inches|inch|in)\.?)?$"#
    )
    .unwrap();

    static ref ACUTE_FEET_INCHES: Regex = Regex::new(
        r#"^(?P<feet>\d+(?:\.\d+)?|\.\d+)\s*´\s*(?P<inches>\d+(?:\.\d+)?|\.\d+)(?:\s+(?P<num>\d+)/(?P<den>\d+))?"?$"#
    )
    .unwrap();

    static ref UNIT_WORDS: Regex = Regex::new(
        r#"(?i)^(?P<feet>\d+(?:\.\d+)?|\.\d+)\s*(?:feet|foot|ft)\.?\s*(?P<inches>\d+(?:\.\d+)?|\.\d+)(?:"|\s*(?:inches|inch|in)\.?)?$"#
    )
    .unwrap();

    static ref HYPHENATED: Regex = Regex::new(
        r"^(?P<feet>\d+(?:\.\d+)?|\.\d+)-(?P<inches>\d+(?:\.\d+)?|\.\d+)$"
    )
    .unwrap();

    static ref SPACE_SEPARATED: Regex = Regex::new(
        r"^(?P<feet>\d+(?:\.\d+)?|\.\d+)\s+(?P<inches>\d+(?:\.\d+)?|\.\d+)$"
    )
    .unwrap();

    static ref WHOLE_AND_FRACTION: Regex = Regex::new(
        r#"(?i)^(?P<inches>\d+(?:\.\d+)?|\.\d+)\s+(?P<num>\d+)/(?P<den>\d+)(?:"|\s*(?:inches|inch|in)\.?)?$"#
    )
    .unwrap();

    static ref FEET_AND_FRACTION: Regex = Regex::new(
        r#"(?i)^(?P<feet>\d+(?:\.\d+)?|\.\d+)'\s*(?P<num>\d+)/(?P<den>\d+)(?:"|\s*(?:inches|inch|in)\.?)?$"#
    )
    .unwrap();
}

/// Accepted notations, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImperialFormat {
    /// `6'9`, `6'9 1/4"`, `6'9 in`
    FeetInches,
    /// `10`, `10"`, `10 inches`
    InchesOnly,
    /// `6´9`, `6´9 1/4"` (acute accent used as a foot mark)
    AcuteFeetInches,
    /// `5 ft 10`, `5feet 10 in`
    UnitWords,
    /// `6-8`
    Hyphenated,
    /// `6 8`
    SpaceSeparated,
    /// `7 3/4`, `7 3/4"` (inches only)
    WholeAndFraction,
    /// `6'3/4`
    FeetAndFraction,
}

impl ImperialFormat {
    /// First match wins; reordering changes results for ambiguous text
    pub const PRIORITY: [ImperialFormat; 8] = [
        ImperialFormat::FeetInches,
        ImperialFormat::InchesOnly,
        ImperialFormat::AcuteFeetInches,
        ImperialFormat::UnitWords,
        ImperialFormat::Hyphenated,
        ImperialFormat::SpaceSeparated,
        ImperialFormat::WholeAndFraction,
        ImperialFormat::FeetAndFraction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImperialFormat::FeetInches => "feet-inches",
            ImperialFormat::InchesOnly => "inches",
            ImperialFormat::AcuteFeetInches => "feet-inches (acute mark)",
            ImperialFormat::UnitWords => "feet-inches (unit words)",
            ImperialFormat::Hyphenated => "feet-inches (hyphen)",
            ImperialFormat::SpaceSeparated => "feet-inches (space)",
            ImperialFormat::WholeAndFraction => "inches with fraction",
            ImperialFormat::FeetAndFraction => "feet with fraction of an inch",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            ImperialFormat::FeetInches => &FEET_INCHES,
            ImperialFormat::InchesOnly => &INCHES_ONLY,
            ImperialFormat::AcuteFeetInches => &ACUTE_FEET_INCHES,
            ImperialFormat::UnitWords => &UNIT_WORDS,
            ImperialFormat::Hyphenated => &HYPHENATED,
            ImperialFormat::SpaceSeparated => &SPACE_SEPARATED,
            ImperialFormat::WholeAndFraction => &WHOLE_AND_FRACTION,
            ImperialFormat::FeetAndFraction => &FEET_AND_FRACTION,
        }
    }

    /// Extract the measure if `normalized` is written in this notation
    pub fn captures(&self, normalized: &str) -> Option<Result<ImperialMeasure, ParseError>> {
        self.pattern()
            .captures(normalized)
            .map(|caps| ImperialMeasure::from_captures(&caps, normalized))
    }
}

impl std::fmt::Display for ImperialFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Try every notation in priority order
pub fn match_format(
    normalized: &str,
) -> Option<(ImperialFormat, Result<ImperialMeasure, ParseError>)> {
    ImperialFormat::PRIORITY
        .iter()
        .find_map(|format| format.captures(normalized).map(|m| (*format, m)))
}

/// Integer fraction of an inch, e.g. 1/4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

/// Feet and inches as written, before unit conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImperialMeasure {
    pub feet: f64,
    pub inches: f64,
    pub fraction: Option<Fraction>,
}

impl ImperialMeasure {
    fn from_captures(caps: &Captures<'_>, normalized: &str) -> Result<Self, ParseError> {
        let decimal = |name: &str| -> Result<f64, ParseError> {
            match caps.name(name) {
                Some(m) => m
                    .as_str()
                    .parse::<f64>()
                    .map_err(|_| ParseError::Unrecognized(normalized.to_string())),
                None => Ok(0.0),
            }
        };
        let integer = |name: &str| -> Result<Option<u32>, ParseError> {
            caps.name(name)
                .map(|m| {
                    m.as_str()
                        .parse::<u32>()
                        .map_err(|_| ParseError::OutOfRange(normalized.to_string()))
                })
                .transpose()
        };

        let fraction = match (integer("num")?, integer("den")?) {
            (Some(_), Some(0)) => return Err(ParseError::ZeroDenominator(normalized.to_string())),
            (Some(numerator), Some(denominator)) => Some(Fraction {
                numerator,
                denominator,
            }),
            _ => None,
        };

        Ok(Self {
            feet: decimal("feet")?,
            inches: decimal("inches")?,
            fraction,
        })
    }

    pub fn total_inches(&self) -> f64 {
        let fraction = self
            .fraction
            .map(|f| f64::from(f.numerator) / f64::from(f.denominator))
            .unwrap_or(0.0);
        self.feet * INCHES_PER_FOOT + self.inches + fraction
    }

    /// Convert to whole millimeters, rounding half away from zero
    pub fn to_millimeters(&self) -> Result<u32, ParseError> {
        let mm = (self.total_inches() * MM_PER_INCH).round();
        if !mm.is_finite() || mm < 0.0 || mm > f64::from(u32::MAX) {
            return Err(ParseError::OutOfRange(format!("{} mm", mm)));
        }
        Ok(mm as u32)
    }
}
