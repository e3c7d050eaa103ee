//! Text and JSON output

use anyhow::Result;
use compliance_engine::{messages, CheckOutcome, Thresholds};
use dimension_parser::{ParseError, ParsedLength};
use serde::Serialize;
use shared_types::{Locale, Measurement, Millimeters};

use crate::cli::OutputFormat;

/// One line of `stair-check parse` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub millimeters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseReport {
    pub fn new(input: &str, result: Result<ParsedLength, ParseError>) -> Self {
        match result {
            Ok(parsed) => Self {
                input: input.to_string(),
                normalized: Some(parsed.normalized),
                notation: Some(parsed.format.name()),
                millimeters: Some(parsed.millimeters),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                normalized: None,
                notation: None,
                millimeters: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn render_outcome(outcome: &CheckOutcome, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let mut out = String::new();
    match outcome {
        CheckOutcome::Evaluated(verdict) if verdict.compliant => {
            out.push_str(&format!("COMPLIANT ({})\n", verdict.code_reference));
        }
        CheckOutcome::Evaluated(verdict) => {
            out.push_str(&format!(
                "NOT COMPLIANT ({}): {} issue(s)\n",
                verdict.code_reference,
                verdict.issues.len()
            ));
            for issue in &verdict.issues {
                out.push_str(&format!("  - {}\n", issue.message));
            }
        }
        CheckOutcome::Invalid { errors } => {
            out.push_str(&format!("INVALID INPUT: {} field(s)\n", errors.len()));
            for error in errors {
                out.push_str(&format!("  - {}\n", error.message));
            }
        }
    }
    Ok(out)
}

pub fn render_thresholds(
    thresholds: &Thresholds,
    locale: Locale,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(thresholds)?);
    }

    let rows = [
        (Measurement::Riser, Some(thresholds.min_riser), thresholds.max_riser),
        (Measurement::Tread, Some(thresholds.min_tread), thresholds.max_tread),
        (Measurement::NarrowSide, thresholds.min_narrow_side, None),
        (Measurement::Width, Some(thresholds.min_width), None),
        (Measurement::Headroom, Some(thresholds.min_headroom), None),
        (Measurement::SpiralWidth, thresholds.min_spiral_width, None),
    ];

    let mut out = format!("{}\n", thresholds.code_reference);
    for (measurement, min, max) in rows {
        // Rows without a minimum do not apply to this stair
        let Some(min) = min else { continue };
        out.push_str(&format!(
            "  {:<40} {}\n",
            messages::subject(measurement, locale),
            range(min, max)
        ));
    }
    Ok(out)
}

fn range(min: Millimeters, max: Option<Millimeters>) -> String {
    match max {
        Some(max) => format!("{} to {}", min, max),
        None => format!(">= {}", min),
    }
}

pub fn render_parse(reports: &[ParseReport], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let mut out = String::new();
    for report in reports {
        match (&report.millimeters, &report.error) {
            (Some(mm), _) => out.push_str(&format!(
                "{:<20} {:>6} mm  [{}] {}\n",
                report.input,
                mm,
                report.notation.unwrap_or_default(),
                report.normalized.as_deref().unwrap_or_default()
            )),
            (None, error) => out.push_str(&format!(
                "{:<20} error: {}\n",
                report.input,
                error.as_deref().unwrap_or("unparseable")
            )),
        }
    }
    Ok(out)
}
