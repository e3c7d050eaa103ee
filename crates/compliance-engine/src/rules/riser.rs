// Riser height range
use super::{above_maximum, below_minimum};
use crate::thresholds::Thresholds;
use shared_types::{Locale, Measurement, StairDimensions, Violation};

/// Minimum first, then maximum
pub fn check_riser(
    thresholds: &Thresholds,
    dimensions: &StairDimensions,
    locale: Locale,
) -> Vec<Violation> {
    let riser = dimensions.riser;
    below_minimum(Measurement::Riser, riser, thresholds.min_riser, locale)
        .into_iter()
        .chain(above_maximum(
            Measurement::Riser,
            riser,
            thresholds.max_riser,
            locale,
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Bound, Millimeters};

    fn thresholds(min: u32, max: Option<u32>) -> Thresholds {
        Thresholds {
            code_reference: "test",
            min_riser: Millimeters(min),
            max_riser: max.map(Millimeters),
            min_tread: Millimeters(0),
            max_tread: None,
            min_narrow_side: None,
            min_width: Millimeters(0),
            min_headroom: Millimeters(0),
            min_spiral_width: None,
        }
    }

    fn riser(mm: u32) -> StairDimensions {
        StairDimensions {
            riser: Millimeters(mm),
            ..Default::default()
        }
    }

    #[test]
    fn test_riser_in_range() {
        assert!(check_riser(&thresholds(125, Some(200)), &riser(150), Locale::En).is_empty());
    }

    #[test]
    fn test_riser_too_low() {
        let violations = check_riser(&thresholds(125, Some(200)), &riser(100), Locale::En);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].bound, Bound::BelowMinimum);
        assert_eq!(violations[0].limit, Millimeters(125));
    }

    #[test]
    fn test_riser_too_high() {
        let violations = check_riser(&thresholds(125, Some(180)), &riser(190), Locale::En);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].bound, Bound::AboveMaximum);
        assert!(violations[0].message.contains("190 mm"));
        assert!(violations[0].message.contains("180 mm"));
    }

    #[test]
    fn test_unbounded_riser_maximum() {
        assert!(check_riser(&thresholds(125, None), &riser(400), Locale::En).is_empty());
    }
}
