/// A length in whole millimeters
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millimeters(pub u32);

impl Millimeters {
    pub const ZERO: Millimeters = Millimeters(0);
}

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

/// The six measured stair dimensions, already in millimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StairDimensions {
    pub riser: Millimeters,
    pub tread: Millimeters,
    pub width: Millimeters,
    pub headroom: Millimeters,
    pub narrow_side: Option<Millimeters>, // Turning stairs only
    pub spiral_width: Option<Millimeters>, // Spiral stairs only
}

/// Which measurement a check looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    Riser,
    Tread,
    NarrowSide,
    Width,
    Headroom,
    SpiralWidth,
}

/// Side of the limit that was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    BelowMinimum,
    AboveMaximum,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Violation {
    pub measurement: Measurement,
    pub bound: Bound,
    pub measured: Millimeters,
    pub limit: Millimeters,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Verdict {
    pub compliant: bool,
    pub code_reference: String, // e.g., "code Part 9"
    pub issues: Vec<Violation>,
}

impl Verdict {
    pub fn from_issues(code_reference: &str, issues: Vec<Violation>) -> Self {
        Self {
            compliant: issues.is_empty(),
            code_reference: code_reference.to_string(),
            issues,
        }
    }

    /// Issue messages in check order
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|v| v.message.as_str()).collect()
    }

    pub fn has_issue(&self, measurement: Measurement, bound: Bound) -> bool {
        self.issues
            .iter()
            .any(|v| v.measurement == measurement && v.bound == bound)
    }
}
