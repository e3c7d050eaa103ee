//! Stair rule table
//!
//! Resolution happens in three layers (bottom to top):
//! 1. Base record - building part, then stair type for Part 9
//! 2. Configuration - turning winders and spiral stairs
//! 3. Exit override - required exits get the wider minimums

use serde::Serialize;
use shared_types::{BuildingPart, Millimeters, StairConfig, StairSelectors, StairType, StairUse};

/// Limits that apply to one stair, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub code_reference: &'static str,
    pub min_riser: Millimeters,
    pub max_riser: Option<Millimeters>,
    pub min_tread: Millimeters,
    pub max_tread: Option<Millimeters>,
    pub min_narrow_side: Option<Millimeters>,
    pub min_width: Millimeters,
    pub min_headroom: Millimeters,
    pub min_spiral_width: Option<Millimeters>,
}

pub const PART_3_REFERENCE: &str = "code Part 3";
pub const PART_9_REFERENCE: &str = "code Part 9";

const PART_3: Thresholds = Thresholds {
    code_reference: PART_3_REFERENCE,
    min_riser: Millimeters(125),
    max_riser: Some(Millimeters(180)),
    min_tread: Millimeters(280),
    max_tread: None,
    min_narrow_side: None,
    min_width: Millimeters(1100),
    min_headroom: Millimeters(2050),
    min_spiral_width: None,
};

const PART_9_PRIVATE: Thresholds = Thresholds {
    code_reference: PART_9_REFERENCE,
    min_riser: Millimeters(125),
    max_riser: Some(Millimeters(200)),
    min_tread: Millimeters(255),
    max_tread: Some(Millimeters(355)),
    min_narrow_side: None,
    min_width: Millimeters(860),
    min_headroom: Millimeters(1950),
    min_spiral_width: None,
};

const PART_9_COMMON: Thresholds = Thresholds {
    code_reference: PART_9_REFERENCE,
    min_riser: Millimeters(125),
    max_riser: Some(Millimeters(180)),
    min_tread: Millimeters(280),
    max_tread: None,
    min_narrow_side: None,
    min_width: Millimeters(900),
    min_headroom: Millimeters(2050),
    min_spiral_width: None,
};

const PART_3_NARROW_SIDE: Millimeters = Millimeters(240);
const PART_9_NARROW_SIDE: Millimeters = Millimeters(150);
const SPIRAL_WIDTH: Millimeters = Millimeters(660);
const SPIRAL_MAX_RISER: Millimeters = Millimeters(240);
const PART_3_EXIT_WIDTH: Millimeters = Millimeters(1100);
const PART_9_EXIT_WIDTH: Millimeters = Millimeters(900);

/// Resolve the limits for a selector tuple
pub fn resolve_thresholds(selectors: &StairSelectors) -> Thresholds {
    let mut thresholds = base_thresholds(selectors.building_part, selectors.stair_type);
    apply_configuration(
        &mut thresholds,
        selectors.building_part,
        selectors.stair_config,
    );
    if selectors.stair_use == StairUse::Exit {
        apply_exit_override(
            &mut thresholds,
            selectors.building_part,
            selectors.stair_config,
        );
    }

    tracing::debug!(
        part = %selectors.building_part,
        stair_type = %selectors.stair_type,
        stair_use = %selectors.stair_use,
        config = %selectors.stair_config,
        ?thresholds,
        "resolved stair thresholds"
    );

    thresholds
}

/// Part 3 does not distinguish private from common stairs
fn base_thresholds(part: BuildingPart, stair_type: StairType) -> Thresholds {
    match (part, stair_type) {
        (BuildingPart::Part3, _) => PART_3,
        (BuildingPart::Part9, StairType::Private) => PART_9_PRIVATE,
        (BuildingPart::Part9, StairType::Common) => PART_9_COMMON,
    }
}

fn apply_configuration(thresholds: &mut Thresholds, part: BuildingPart, config: StairConfig) {
    match (part, config) {
        (BuildingPart::Part3, StairConfig::Turning) => {
            thresholds.min_narrow_side = Some(PART_3_NARROW_SIDE);
        }
        (BuildingPart::Part9, StairConfig::Turning) => {
            thresholds.min_narrow_side = Some(PART_9_NARROW_SIDE);
        }
        (BuildingPart::Part9, StairConfig::Spiral) => {
            thresholds.min_spiral_width = Some(SPIRAL_WIDTH);
            thresholds.max_riser = Some(SPIRAL_MAX_RISER);
        }
        (BuildingPart::Part3, StairConfig::Spiral) | (_, StairConfig::Straight) => {}
    }
}

fn apply_exit_override(thresholds: &mut Thresholds, part: BuildingPart, config: StairConfig) {
    match part {
        BuildingPart::Part3 => {
            thresholds.min_width = PART_3_EXIT_WIDTH;
            if config == StairConfig::Turning {
                thresholds.min_narrow_side = Some(PART_3_NARROW_SIDE);
            }
        }
        BuildingPart::Part9 => {
            thresholds.min_width = PART_9_EXIT_WIDTH;
        }
    }
}
