//! Field validation that runs before the rule engine
//!
//! Every field is checked on its own and every failure is reported, so the
//! caller can flag all bad fields at once. The engine only runs when all
//! required fields pass.

use serde::{Deserialize, Serialize};
use shared_types::{Locale, Measurement, Millimeters, StairConfig, StairDimensions};

use crate::messages::invalid_value_message;

/// How the raw field text is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Plain numbers in millimeters
    #[default]
    Metric,
    /// Feet/inches text for the dimension parser
    Imperial,
}

impl UnitSystem {
    pub fn code(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" | "si" => Some(UnitSystem::Metric),
            "imperial" | "in" | "ft" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Form field text as entered; `None` when the field was left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDimensions {
    pub riser: Option<String>,
    pub tread: Option<String>,
    pub narrow_side: Option<String>,
    pub width: Option<String>,
    pub headroom: Option<String>,
    pub spiral_width: Option<String>,
}

impl RawDimensions {
    pub fn get(&self, field: Measurement) -> Option<&str> {
        match field {
            Measurement::Riser => self.riser.as_deref(),
            Measurement::Tread => self.tread.as_deref(),
            Measurement::NarrowSide => self.narrow_side.as_deref(),
            Measurement::Width => self.width.as_deref(),
            Measurement::Headroom => self.headroom.as_deref(),
            Measurement::SpiralWidth => self.spiral_width.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Measurement,
    pub message: String,
}

/// Fields to validate for a configuration, in display order
pub fn required_fields(config: StairConfig) -> Vec<Measurement> {
    let mut fields = vec![Measurement::Riser, Measurement::Tread];
    if config.requires_narrow_side() {
        fields.push(Measurement::NarrowSide);
    }
    fields.push(Measurement::Width);
    fields.push(Measurement::Headroom);
    if config.requires_spiral_width() {
        fields.push(Measurement::SpiralWidth);
    }
    fields
}

/// Convert one field to millimeters; `None` if absent, unreadable or not positive
pub fn field_to_millimeters(text: Option<&str>, units: UnitSystem) -> Option<Millimeters> {
    let mm = match units {
        UnitSystem::Metric => parse_metric(text?)?,
        UnitSystem::Imperial => dimension_parser::parse_optional(text).ok()?,
    };
    (mm > 0).then_some(Millimeters(mm))
}

/// Decimal millimeters, rounded to the nearest whole millimeter
fn parse_metric(text: &str) -> Option<u32> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() || value <= 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}

/// Validate all fields required by `config`. Fields the configuration does
/// not use are ignored and come back as `None`.
pub fn validate_dimensions(
    raw: &RawDimensions,
    units: UnitSystem,
    config: StairConfig,
    locale: Locale,
) -> Result<StairDimensions, Vec<FieldError>> {
    let mut dimensions = StairDimensions::default();
    let mut errors = Vec::new();

    for field in required_fields(config) {
        let Some(mm) = field_to_millimeters(raw.get(field), units) else {
            tracing::debug!(?field, value = ?raw.get(field), units = units.code(), "rejected dimension field");
            errors.push(FieldError {
                field,
                message: invalid_value_message(field, locale),
            });
            continue;
        };

        match field {
            Measurement::Riser => dimensions.riser = mm,
            Measurement::Tread => dimensions.tread = mm,
            Measurement::NarrowSide => dimensions.narrow_side = Some(mm),
            Measurement::Width => dimensions.width = mm,
            Measurement::Headroom => dimensions.headroom = mm,
            Measurement::SpiralWidth => dimensions.spiral_width = Some(mm),
        }
    }

    if errors.is_empty() {
        Ok(dimensions)
    } else {
        Err(errors)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any positive whole number of millimeters passes unchanged
        #[test]
        fn positive_integers_accepted(mm in 1u32..100_000) {
            prop_assert_eq!(
                field_to_millimeters(Some(&mm.to_string()), UnitSystem::Metric),
                Some(Millimeters(mm))
            );
        }

        /// Property: validation never yields a zero-length required dimension
        #[test]
        fn accepted_dimensions_are_positive(
            riser in "[0-9.\\-]{0,6}",
            tread in "[0-9.\\-]{0,6}",
            width in "[0-9.\\-]{0,6}",
            headroom in "[0-9.\\-]{0,6}",
        ) {
            let raw = RawDimensions {
                riser: Some(riser),
                tread: Some(tread),
                width: Some(width),
                headroom: Some(headroom),
                ..Default::default()
            };
            if let Ok(dims) = validate_dimensions(&raw, UnitSystem::Metric, StairConfig::Straight, Locale::En) {
                prop_assert!(dims.riser.0 > 0);
                prop_assert!(dims.tread.0 > 0);
                prop_assert!(dims.width.0 > 0);
                prop_assert!(dims.headroom.0 > 0);
            }
        }
    }
}
