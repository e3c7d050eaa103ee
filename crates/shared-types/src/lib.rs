pub mod locale;
pub mod selectors;
pub mod types;

pub use locale::Locale;
pub use selectors::{
    BuildingPart, BuildingUse, SelectorParseError, StairConfig, StairSelectors, StairType,
    StairUse,
};
pub use types::{Bound, Measurement, Millimeters, StairDimensions, Verdict, Violation};
