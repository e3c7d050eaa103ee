//! User-facing text for violations and field errors

use shared_types::{Bound, Locale, Measurement, Millimeters};

/// Sentence subject for a measurement
pub fn subject(measurement: Measurement, locale: Locale) -> &'static str {
    match (locale, measurement) {
        (Locale::En, Measurement::Riser) => "Riser height",
        (Locale::En, Measurement::Tread) => "Tread depth",
        (Locale::En, Measurement::NarrowSide) => "Narrow-side tread width",
        (Locale::En, Measurement::Width) => "Stair width",
        (Locale::En, Measurement::Headroom) => "Headroom",
        (Locale::En, Measurement::SpiralWidth) => "Spiral stair clear width",
        (Locale::Fr, Measurement::Riser) => "Hauteur de contremarche",
        (Locale::Fr, Measurement::Tread) => "Profondeur du giron",
        (Locale::Fr, Measurement::NarrowSide) => "Giron du côté étroit",
        (Locale::Fr, Measurement::Width) => "Largeur de l'escalier",
        (Locale::Fr, Measurement::Headroom) => "Échappée",
        (Locale::Fr, Measurement::SpiralWidth) => "Largeur libre de l'escalier hélicoïdal",
    }
}

/// Field name as it appears inside a sentence
pub fn field_label(measurement: Measurement, locale: Locale) -> &'static str {
    match (locale, measurement) {
        (Locale::En, Measurement::Riser) => "riser height",
        (Locale::En, Measurement::Tread) => "tread depth",
        (Locale::En, Measurement::NarrowSide) => "narrow-side tread width",
        (Locale::En, Measurement::Width) => "stair width",
        (Locale::En, Measurement::Headroom) => "headroom",
        (Locale::En, Measurement::SpiralWidth) => "spiral stair clear width",
        (Locale::Fr, Measurement::Riser) => "hauteur de contremarche",
        (Locale::Fr, Measurement::Tread) => "profondeur du giron",
        (Locale::Fr, Measurement::NarrowSide) => "giron du côté étroit",
        (Locale::Fr, Measurement::Width) => "largeur de l'escalier",
        (Locale::Fr, Measurement::Headroom) => "échappée",
        (Locale::Fr, Measurement::SpiralWidth) => "largeur libre de l'escalier hélicoïdal",
    }
}

/// Rule-violation message naming the measured value and the limit
pub fn violation_message(
    measurement: Measurement,
    bound: Bound,
    measured: Millimeters,
    limit: Millimeters,
    locale: Locale,
) -> String {
    let subject = subject(measurement, locale);
    match (locale, bound) {
        (Locale::En, Bound::BelowMinimum) => format!(
            "{} of {} mm is below the minimum of {} mm",
            subject, measured.0, limit.0
        ),
        (Locale::En, Bound::AboveMaximum) => format!(
            "{} of {} mm exceeds the maximum of {} mm",
            subject, measured.0, limit.0
        ),
        (Locale::Fr, Bound::BelowMinimum) => format!(
            "{} : {} mm est sous le minimum de {} mm",
            subject, measured.0, limit.0
        ),
        (Locale::Fr, Bound::AboveMaximum) => format!(
            "{} : {} mm dépasse le maximum de {} mm",
            subject, measured.0, limit.0
        ),
    }
}

/// Same text whether the field was left empty or could not be read
pub fn invalid_value_message(measurement: Measurement, locale: Locale) -> String {
    let label = field_label(measurement, locale);
    match locale {
        Locale::En => format!("Please enter a valid numeric value for {}", label),
        Locale::Fr => format!("Veuillez saisir une valeur numérique valide ({})", label),
    }
}
