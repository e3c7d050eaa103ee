pub mod messages;
pub mod rules;
pub mod submission;
pub mod thresholds;
pub mod validation;

pub use shared_types::{
    Bound, BuildingPart, BuildingUse, Locale, Measurement, Millimeters, StairConfig, StairDimensions,
    StairSelectors, StairType, StairUse, Verdict, Violation,
};
pub use submission::{check_submission, CheckOutcome, StairSubmission};
pub use thresholds::{resolve_thresholds, Thresholds};
pub use validation::{validate_dimensions, FieldError, RawDimensions, UnitSystem};

/// ComplianceEngine entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceEngine {
    locale: Locale,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Evaluate measured dimensions against the rule table for `selectors`.
    ///
    /// Dimensions must already be validated (see [`validate_dimensions`]).
    /// Every check runs and issues keep check order.
    pub fn evaluate(&self, selectors: &StairSelectors, dimensions: &StairDimensions) -> Verdict {
        let thresholds = resolve_thresholds(selectors);
        let mut issues = Vec::new();

        issues.extend(rules::riser::check_riser(&thresholds, dimensions, self.locale));
        issues.extend(rules::tread::check_tread(&thresholds, dimensions, self.locale));
        issues.extend(rules::clearance::check_clearances(
            &thresholds,
            selectors.stair_config,
            dimensions,
            self.locale,
        ));

        let verdict = Verdict::from_issues(thresholds.code_reference, issues);
        tracing::debug!(
            code_reference = %verdict.code_reference,
            compliant = verdict.compliant,
            issues = verdict.issues.len(),
            "evaluated stair"
        );
        verdict
    }
}

/// Evaluate with English messages
pub fn evaluate_compliance(selectors: &StairSelectors, dimensions: &StairDimensions) -> Verdict {
    ComplianceEngine::new().evaluate(selectors, dimensions)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: compliant exactly when no issues were collected
        #[test]
        fn compliant_iff_no_issues(
            riser in 50u32..300,
            tread in 150u32..450,
            width in 500u32..1500,
            headroom in 1500u32..2500,
            narrow in 50u32..300,
            spiral in 400u32..900,
            part9 in any::<bool>(),
            private in any::<bool>(),
            exit in any::<bool>(),
            config in 0usize..3,
        ) {
            let selectors = StairSelectors::new(
                if part9 { BuildingPart::Part9 } else { BuildingPart::Part3 },
                BuildingUse::Residential,
                if private { StairType::Private } else { StairType::Common },
                if exit { StairUse::Exit } else { StairUse::Interior },
                [StairConfig::Straight, StairConfig::Turning, StairConfig::Spiral][config],
            );
            let dimensions = StairDimensions {
                riser: Millimeters(riser),
                tread: Millimeters(tread),
                width: Millimeters(width),
                headroom: Millimeters(headroom),
                narrow_side: Some(Millimeters(narrow)),
                spiral_width: Some(Millimeters(spiral)),
            };
            let verdict = evaluate_compliance(&selectors, &dimensions);
            prop_assert_eq!(verdict.compliant, verdict.issues.is_empty());

            // Deterministic
            prop_assert_eq!(&verdict, &evaluate_compliance(&selectors, &dimensions));

            // Every message names its measured value and limit
            for issue in &verdict.issues {
                let measured = format!("{} mm", issue.measured.0);
                let limit = format!("{} mm", issue.limit.0);
                prop_assert!(issue.message.contains(&measured));
                prop_assert!(issue.message.contains(&limit));
            }
        }
    }
}
