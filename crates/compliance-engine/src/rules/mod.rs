//! Dimension checks, one module per group of measurements
//!
//! Every check runs; callers concatenate results in this order:
//! riser, tread, clearance (narrow side, width, headroom, spiral width).

pub mod clearance;
pub mod riser;
pub mod tread;

use crate::messages::violation_message;
use shared_types::{Bound, Locale, Measurement, Millimeters, Violation};

pub(crate) fn below_minimum(
    measurement: Measurement,
    measured: Millimeters,
    limit: Millimeters,
    locale: Locale,
) -> Option<Violation> {
    (measured < limit).then(|| violation(measurement, Bound::BelowMinimum, measured, limit, locale))
}

/// An unbounded maximum never fails
pub(crate) fn above_maximum(
    measurement: Measurement,
    measured: Millimeters,
    limit: Option<Millimeters>,
    locale: Locale,
) -> Option<Violation> {
    let limit = limit?;
    (measured > limit).then(|| violation(measurement, Bound::AboveMaximum, measured, limit, locale))
}

fn violation(
    measurement: Measurement,
    bound: Bound,
    measured: Millimeters,
    limit: Millimeters,
    locale: Locale,
) -> Violation {
    Violation {
        measurement,
        bound,
        measured,
        limit,
        message: violation_message(measurement, bound, measured, limit, locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_itself_passes() {
        assert!(below_minimum(Measurement::Width, Millimeters(900), Millimeters(900), Locale::En).is_none());
        assert!(above_maximum(
            Measurement::Riser,
            Millimeters(200),
            Some(Millimeters(200)),
            Locale::En
        )
        .is_none());
    }

    #[test]
    fn test_unbounded_maximum() {
        assert!(above_maximum(Measurement::Tread, Millimeters(5000), None, Locale::En).is_none());
    }

    #[test]
    fn test_violation_records_values() {
        let v = below_minimum(Measurement::Width, Millimeters(850), Millimeters(900), Locale::En)
            .unwrap();
        assert_eq!(v.bound, Bound::BelowMinimum);
        assert_eq!(v.measured, Millimeters(850));
        assert_eq!(v.limit, Millimeters(900));
        assert!(v.message.contains("850"));
    }
}
