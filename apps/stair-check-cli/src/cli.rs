//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use compliance_engine::{RawDimensions, StairSubmission, UnitSystem};
use shared_types::{BuildingPart, BuildingUse, Locale, StairConfig, StairSelectors, StairType, StairUse};

#[derive(Parser, Debug)]
#[command(name = "stair-check")]
#[command(
    version,
    about = "Check stair dimensions against building code limits"
)]
pub struct Args {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Message language: en or fr (defaults to the submission's, then en)
    #[arg(short, long, global = true, value_parser = Locale::parse_code)]
    pub locale: Option<Locale>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate and evaluate one stair
    Check(CheckArgs),

    /// Convert feet/inches text to millimeters
    Parse {
        /// Lengths such as 6'-9 1/4" or "5 ft 10 in"
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Show the limits that apply to a stair
    Thresholds(SelectorArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SelectorArgs {
    /// Building code part: part3 or part9
    #[arg(long, default_value = "part9", value_parser = BuildingPart::parse_code)]
    pub part: BuildingPart,

    /// Major occupancy, e.g. residential or business
    #[arg(long = "use", default_value = "residential", value_parser = BuildingUse::parse_code)]
    pub building_use: BuildingUse,

    /// private (single dwelling) or common
    #[arg(long = "type", default_value = "private", value_parser = StairType::parse_code)]
    pub stair_type: StairType,

    /// interior or exit
    #[arg(long, default_value = "interior", value_parser = StairUse::parse_code)]
    pub stair_use: StairUse,

    /// straight, turning or spiral
    #[arg(long = "config", default_value = "straight", value_parser = StairConfig::parse_code)]
    pub stair_config: StairConfig,
}

impl SelectorArgs {
    pub fn selectors(&self) -> StairSelectors {
        StairSelectors::new(
            self.part,
            self.building_use,
            self.stair_type,
            self.stair_use,
            self.stair_config,
        )
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selectors: SelectorArgs,

    /// How dimension values are written: metric (mm) or imperial
    #[arg(long, default_value = "metric", value_parser = parse_units)]
    pub units: UnitSystem,

    #[arg(long, allow_hyphen_values = true)]
    pub riser: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub tread: Option<String>,

    /// Narrow-side tread width (turning stairs)
    #[arg(long, allow_hyphen_values = true)]
    pub narrow_side: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub headroom: Option<String>,

    /// Clear width (spiral stairs)
    #[arg(long, allow_hyphen_values = true)]
    pub spiral_width: Option<String>,

    /// Read the whole submission from a JSON file ("-" for stdin)
    #[arg(
        long,
        conflicts_with_all = ["riser", "tread", "narrow_side", "width", "headroom", "spiral_width"]
    )]
    pub input: Option<PathBuf>,
}

impl CheckArgs {
    /// Build a submission from the dimension flags
    pub fn submission(&self, locale: Locale) -> StairSubmission {
        StairSubmission {
            selectors: self.selectors.selectors(),
            units: self.units,
            locale,
            dimensions: RawDimensions {
                riser: self.riser.clone(),
                tread: self.tread.clone(),
                narrow_side: self.narrow_side.clone(),
                width: self.width.clone(),
                headroom: self.headroom.clone(),
                spiral_width: self.spiral_width.clone(),
            },
        }
    }
}

fn parse_units(s: &str) -> Result<UnitSystem, String> {
    UnitSystem::parse_code(s).ok_or_else(|| format!("Unknown unit system: {} (metric or imperial)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_defaults() {
        let args = Args::try_parse_from(["stair-check", "check", "--riser", "180"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.locale, None);
        let Command::Check(check) = args.command else {
            panic!("expected check");
        };
        assert_eq!(check.units, UnitSystem::Metric);
        assert_eq!(
            check.selectors.selectors(),
            StairSelectors::new(
                BuildingPart::Part9,
                BuildingUse::Residential,
                StairType::Private,
                StairUse::Interior,
                StairConfig::Straight,
            )
        );
        assert_eq!(check.riser.as_deref(), Some("180"));
        assert_eq!(check.tread, None);
    }

    #[test]
    fn test_selector_aliases() {
        let args = Args::try_parse_from([
            "stair-check",
            "thresholds",
            "--part",
            "3",
            "--type",
            "public",
            "--stair-use",
            "egress",
            "--config",
            "winders",
        ])
        .unwrap();
        let Command::Thresholds(selectors) = args.command else {
            panic!("expected thresholds");
        };
        assert_eq!(selectors.part, BuildingPart::Part3);
        assert_eq!(selectors.stair_type, StairType::Common);
        assert_eq!(selectors.stair_use, StairUse::Exit);
        assert_eq!(selectors.stair_config, StairConfig::Turning);
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = Args::try_parse_from(["stair-check", "thresholds", "--part", "part7"]).unwrap_err();
        assert!(err.to_string().contains("part7"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "stair-check",
            "check",
            "--units",
            "imperial",
            "--riser",
            "7 3/4",
            "--format",
            "json",
            "--locale",
            "fr",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.locale, Some(Locale::Fr));
    }

    #[test]
    fn test_input_conflicts_with_dimension_flags() {
        let result = Args::try_parse_from([
            "stair-check",
            "check",
            "--input",
            "stair.json",
            "--riser",
            "180",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_input() {
        assert!(Args::try_parse_from(["stair-check", "parse"]).is_err());
        let args = Args::try_parse_from(["stair-check", "parse", "6'2", "10\""]).unwrap();
        let Command::Parse { inputs } = args.command else {
            panic!("expected parse");
        };
        assert_eq!(inputs, vec!["6'2", "10\""]);
    }

    #[test]
    fn test_submission_from_flags() {
        let args = Args::try_parse_from([
            "stair-check",
            "check",
            "--config",
            "turning",
            "--narrow-side",
            "160",
        ])
        .unwrap();
        let Command::Check(check) = args.command else {
            panic!("expected check");
        };
        let submission = check.submission(Locale::Fr);
        assert_eq!(submission.locale, Locale::Fr);
        assert_eq!(submission.selectors.stair_config, StairConfig::Turning);
        assert_eq!(submission.dimensions.narrow_side.as_deref(), Some("160"));
    }
}
