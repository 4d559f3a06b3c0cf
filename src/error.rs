use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigitLensError {
    #[error("no numeric tokens found in input")]
    NoTokens,

    #[error("chi-squared computation failed: {0}")]
    Numerical(String),

    #[error("analysis cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
