//! One form submission: selectors plus raw field text, in and out as JSON

use serde::{Deserialize, Serialize};
use shared_types::{Locale, StairSelectors, Verdict};

use crate::validation::{validate_dimensions, FieldError, RawDimensions, UnitSystem};
use crate::ComplianceEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairSubmission {
    pub selectors: StairSelectors,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub dimensions: RawDimensions,
}

/// Either a verdict, or the field errors that stopped evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Evaluated(Verdict),
    Invalid { errors: Vec<FieldError> },
}

impl CheckOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            CheckOutcome::Evaluated(verdict) => Some(verdict),
            CheckOutcome::Invalid { .. } => None,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CheckOutcome::Evaluated(_) => &[],
            CheckOutcome::Invalid { errors } => errors,
        }
    }

    /// Only an evaluated, violation-free submission is compliant
    pub fn is_compliant(&self) -> bool {
        self.verdict().is_some_and(|v| v.compliant)
    }
}

/// Validate the fields, then evaluate only if every required field passed
pub fn check_submission(submission: &StairSubmission) -> CheckOutcome {
    ComplianceEngine::with_locale(submission.locale).check_submission(submission)
}

impl ComplianceEngine {
    /// Field messages use the engine's locale, not the submission's
    pub fn check_submission(&self, submission: &StairSubmission) -> CheckOutcome {
        match validate_dimensions(
            &submission.dimensions,
            submission.units,
            submission.selectors.stair_config,
            self.locale(),
        ) {
            Ok(dimensions) => {
                CheckOutcome::Evaluated(self.evaluate(&submission.selectors, &dimensions))
            }
            Err(errors) => {
                tracing::info!(
                    invalid_fields = errors.len(),
                    "submission rejected before evaluation"
                );
                CheckOutcome::Invalid { errors }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{BuildingPart, BuildingUse, Measurement, StairConfig, StairType, StairUse};

    fn submission(units: UnitSystem, riser: &str) -> StairSubmission {
        StairSubmission {
            selectors: StairSelectors::new(
                BuildingPart::Part9,
                BuildingUse::Residential,
                StairType::Private,
                StairUse::Interior,
                StairConfig::Straight,
            ),
            units,
            locale: Locale::En,
            dimensions: RawDimensions {
                riser: Some(riser.to_string()),
                tread: Some("300".to_string()),
                width: Some("900".to_string()),
                headroom: Some("2000".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_valid_submission_is_evaluated() {
        let outcome = check_submission(&submission(UnitSystem::Metric, "150"));
        assert!(outcome.is_compliant());
        assert_eq!(outcome.verdict().unwrap().code_reference, "code Part 9");
    }

    #[test]
    fn test_invalid_field_short_circuits() {
        let outcome = check_submission(&submission(UnitSystem::Metric, "-150"));
        assert!(outcome.verdict().is_none());
        assert!(!outcome.is_compliant());
        assert_eq!(outcome.field_errors()[0].field, Measurement::Riser);
    }

    #[test]
    fn test_imperial_text_in_imperial_mode_only() {
        // 7 3/4" = 197 mm
        let mut imperial = submission(UnitSystem::Imperial, "7 3/4\"");
        imperial.dimensions.tread = Some("11 3/4".to_string());
        imperial.dimensions.width = Some("36".to_string());
        imperial.dimensions.headroom = Some("6'8".to_string());
        assert!(check_submission(&imperial).is_compliant());

        let metric = submission(UnitSystem::Metric, "7 3/4\"");
        assert!(!check_submission(&metric).field_errors().is_empty());
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = check_submission(&submission(UnitSystem::Metric, "250"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "evaluated");
        assert_eq!(json["compliant"], false);
        assert_eq!(json["issues"][0]["measurement"], "riser");

        let invalid = check_submission(&submission(UnitSystem::Metric, ""));
        let json = serde_json::to_value(&invalid).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"][0]["field"], "riser");
    }

    #[test]
    fn test_submission_json_defaults() {
        let json = r#"{
            "selectors": {
                "building_part": "part9",
                "building_use": "residential",
                "stair_type": "common",
                "stair_use": "exit",
                "stair_config": "straight"
            },
            "dimensions": {"riser": "150", "tread": "300", "width": "850", "headroom": "2100"}
        }"#;
        let submission: StairSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.units, UnitSystem::Metric);
        assert_eq!(submission.locale, Locale::En);
        assert_eq!(submission.dimensions.narrow_side, None);
    }
}
