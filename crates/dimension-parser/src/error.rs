use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No length entered")]
    Empty,

    #[error("Unrecognized length notation: {0}")]
    Unrecognized(String),

    #[error("Fraction has a zero denominator: {0}")]
    ZeroDenominator(String),

    #[error("Length out of range: {0}")]
    OutOfRange(String),
}
