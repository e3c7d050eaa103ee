// Narrow-side width, stair width, headroom and spiral clear width
use super::below_minimum;
use crate::thresholds::Thresholds;
use shared_types::{Locale, Measurement, Millimeters, StairConfig, StairDimensions, Violation};

/// Checks in order: narrow side (turning), width, headroom, spiral width (spiral).
/// A configuration-specific dimension that was not supplied counts as 0 mm.
pub fn check_clearances(
    thresholds: &Thresholds,
    config: StairConfig,
    dimensions: &StairDimensions,
    locale: Locale,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if config.requires_narrow_side() {
        if let Some(limit) = thresholds.min_narrow_side {
            let measured = dimensions.narrow_side.unwrap_or(Millimeters::ZERO);
            violations.extend(below_minimum(
                Measurement::NarrowSide,
                measured,
                limit,
                locale,
            ));
        }
    }

    violations.extend(below_minimum(
        Measurement::Width,
        dimensions.width,
        thresholds.min_width,
        locale,
    ));

    violations.extend(below_minimum(
        Measurement::Headroom,
        dimensions.headroom,
        thresholds.min_headroom,
        locale,
    ));

    if config.requires_spiral_width() {
        if let Some(limit) = thresholds.min_spiral_width {
            let measured = dimensions.spiral_width.unwrap_or(Millimeters::ZERO);
            violations.extend(below_minimum(
                Measurement::SpiralWidth,
                measured,
                limit,
                locale,
            ));
        }
    }

    violations
}
