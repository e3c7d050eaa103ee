//! Subcommand handlers; each returns the process exit code

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use compliance_engine::{resolve_thresholds, CheckOutcome, ComplianceEngine, StairSubmission};
use shared_types::Locale;

use crate::cli::{Args, CheckArgs, Command, OutputFormat, SelectorArgs};
use crate::render::{render_outcome, render_parse, render_thresholds, ParseReport};
use crate::{EXIT_COMPLIANT, EXIT_INVALID_INPUT, EXIT_NOT_COMPLIANT, EXIT_OK};

pub fn run(args: &Args, out: &mut impl Write) -> Result<u8> {
    match &args.command {
        Command::Check(check) => run_check(check, args.locale, args.format, out),
        Command::Parse { inputs } => run_parse(inputs, args.format, out),
        Command::Thresholds(selectors) => {
            run_thresholds(selectors, args.locale.unwrap_or_default(), args.format, out)
        }
    }
}

/// 0 compliant, 1 evaluated with violations, 2 rejected before evaluation
pub fn exit_code(outcome: &CheckOutcome) -> u8 {
    match outcome {
        CheckOutcome::Evaluated(verdict) if verdict.compliant => EXIT_COMPLIANT,
        CheckOutcome::Evaluated(_) => EXIT_NOT_COMPLIANT,
        CheckOutcome::Invalid { .. } => EXIT_INVALID_INPUT,
    }
}

fn run_check(
    check: &CheckArgs,
    locale: Option<Locale>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let submission = match &check.input {
        Some(path) => load_submission(path)?,
        None => check.submission(locale.unwrap_or_default()),
    };
    // --locale wins over the file's own locale
    let locale = locale.unwrap_or(submission.locale);

    tracing::info!(
        part = %submission.selectors.building_part,
        stair_type = %submission.selectors.stair_type,
        stair_use = %submission.selectors.stair_use,
        config = %submission.selectors.stair_config,
        units = submission.units.code(),
        "checking stair"
    );

    let outcome = ComplianceEngine::with_locale(locale).check_submission(&submission);
    out.write_all(render_outcome(&outcome, format)?.as_bytes())?;
    Ok(exit_code(&outcome))
}

fn run_parse(inputs: &[String], format: OutputFormat, out: &mut impl Write) -> Result<u8> {
    let reports: Vec<ParseReport> = inputs
        .iter()
        .map(|input| ParseReport::new(input, dimension_parser::parse_detailed(input)))
        .collect();
    out.write_all(render_parse(&reports, format)?.as_bytes())?;

    if reports.iter().all(ParseReport::is_ok) {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_INVALID_INPUT)
    }
}

fn run_thresholds(
    selectors: &SelectorArgs,
    locale: Locale,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let thresholds = resolve_thresholds(&selectors.selectors());
    out.write_all(render_thresholds(&thresholds, locale, format)?.as_bytes())?;
    Ok(EXIT_OK)
}

/// Read a JSON submission from a file, or stdin for "-"
pub fn load_submission(path: &Path) -> Result<StairSubmission> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read submission from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid submission JSON in {}", path.display()))
}
