// Tread depth range
use super::{above_maximum, below_minimum};
use crate::thresholds::Thresholds;
use shared_types::{Locale, Measurement, StairDimensions, Violation};

/// Minimum first, then maximum (Part 9 private stairs only have one)
pub fn check_tread(
    thresholds: &Thresholds,
    dimensions: &StairDimensions,
    locale: Locale,
) -> Vec<Violation> {
    let tread = dimensions.tread;
    below_minimum(Measurement::Tread, tread, thresholds.min_tread, locale)
        .into_iter()
        .chain(above_maximum(
            Measurement::Tread,
            tread,
            thresholds.max_tread,
            locale,
        ))
        .collect()
}
