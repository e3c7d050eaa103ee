//! Categorical selectors that pick a branch of the stair rule table
//!
//! Five independent axes:
//! - Building part (Part 3 large buildings, Part 9 houses and small buildings)
//! - Building use (major occupancy group, carried through but not discriminating)
//! - Stair type (private to one dwelling unit, or common)
//! - Stair use (interior access, or required exit)
//! - Stair configuration (straight flights, turning winders, spiral)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown code passed to one of the `parse_code` constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {selector} code: {code}")]
pub struct SelectorParseError {
    pub selector: &'static str,
    pub code: String,
}

impl SelectorParseError {
    fn new(selector: &'static str, code: &str) -> Self {
        Self {
            selector,
            code: code.to_string(),
        }
    }
}

/// Part of the building code the building falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingPart {
    /// Large buildings and assembly/care/high-hazard occupancies
    Part3,
    /// Houses and small buildings
    Part9,
}

impl BuildingPart {
    pub fn code(&self) -> &'static str {
        match self {
            BuildingPart::Part3 => "part3",
            BuildingPart::Part9 => "part9",
        }
    }

    /// Parse from code or alias (case-insensitive): "part9", "part-9", "part 9", "9"
    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        match s.trim().to_lowercase().as_str() {
            "part3" | "part-3" | "part 3" | "p3" | "3" => Ok(BuildingPart::Part3),
            "part9" | "part-9" | "part 9" | "p9" | "9" => Ok(BuildingPart::Part9),
            _ => Err(SelectorParseError::new("building part", s)),
        }
    }
}

/// Major occupancy group of the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingUse {
    /// Group A
    Assembly,
    /// Group B, care and treatment
    Care,
    /// Group B, detention
    Detention,
    /// Group C
    Residential,
    /// Group D
    Business,
    /// Group E
    Mercantile,
    /// Group F
    Industrial,
}

impl BuildingUse {
    pub fn code(&self) -> &'static str {
        match self {
            BuildingUse::Assembly => "assembly",
            BuildingUse::Care => "care",
            BuildingUse::Detention => "detention",
            BuildingUse::Residential => "residential",
            BuildingUse::Business => "business",
            BuildingUse::Mercantile => "mercantile",
            BuildingUse::Industrial => "industrial",
        }
    }

    /// Parse from code or occupancy group letter (case-insensitive)
    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        match s.trim().to_lowercase().as_str() {
            "assembly" | "a" => Ok(BuildingUse::Assembly),
            "care" | "b" => Ok(BuildingUse::Care),
            "detention" => Ok(BuildingUse::Detention),
            "residential" | "c" => Ok(BuildingUse::Residential),
            "business" | "d" => Ok(BuildingUse::Business),
            "mercantile" | "e" => Ok(BuildingUse::Mercantile),
            "industrial" | "f" => Ok(BuildingUse::Industrial),
            _ => Err(SelectorParseError::new("building use", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairType {
    /// Serves a single dwelling unit
    Private,
    /// Serves more than one unit or the public
    Common,
}

impl StairType {
    pub fn code(&self) -> &'static str {
        match self {
            StairType::Private => "private",
            StairType::Common => "common",
        }
    }

    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(StairType::Private),
            "common" | "public" => Ok(StairType::Common),
            _ => Err(SelectorParseError::new("stair type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairUse {
    Interior,
    /// Stair forming part of a required means of egress
    Exit,
}

impl StairUse {
    pub fn code(&self) -> &'static str {
        match self {
            StairUse::Interior => "interior",
            StairUse::Exit => "exit",
        }
    }

    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        match s.trim().to_lowercase().as_str() {
            "interior" => Ok(StairUse::Interior),
            "exit" | "egress" => Ok(StairUse::Exit),
            _ => Err(SelectorParseError::new("stair use", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairConfig {
    Straight,
    /// Winders or tapered treads around a turn
    Turning,
    Spiral,
}

impl StairConfig {
    pub fn code(&self) -> &'static str {
        match self {
            StairConfig::Straight => "straight",
            StairConfig::Turning => "turning",
            StairConfig::Spiral => "spiral",
        }
    }

    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(StairConfig::Straight),
            "turning" | "winder" | "winders" => Ok(StairConfig::Turning),
            "spiral" => Ok(StairConfig::Spiral),
            _ => Err(SelectorParseError::new("stair configuration", s)),
        }
    }

    /// Whether the narrow-side width is measured for this configuration
    pub fn requires_narrow_side(&self) -> bool {
        matches!(self, StairConfig::Turning)
    }

    /// Whether the spiral clear width is measured for this configuration
    pub fn requires_spiral_width(&self) -> bool {
        matches!(self, StairConfig::Spiral)
    }
}

macro_rules! display_as_code {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.code())
                }
            }
        )*
    };
}

display_as_code!(BuildingPart, BuildingUse, StairType, StairUse, StairConfig);

/// The full selector tuple for one stair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StairSelectors {
    pub building_part: BuildingPart,
    pub building_use: BuildingUse,
    pub stair_type: StairType,
    pub stair_use: StairUse,
    pub stair_config: StairConfig,
}

impl StairSelectors {
    pub fn new(
        building_part: BuildingPart,
        building_use: BuildingUse,
        stair_type: StairType,
        stair_use: StairUse,
        stair_config: StairConfig,
    ) -> Self {
        Self {
            building_part,
            building_use,
            stair_type,
            stair_use,
            stair_config,
        }
    }
}
