//! Numeric tokens consumed by the analysis engine.
//!
//! A token is either raw text captured by an upstream extraction stage
//! (document scraping, OCR) or a value that was already numeric at the
//! source (pixel samples, transform coefficients). The engine treats
//! both uniformly.

use std::fmt;

/// A single observed value, in textual or numeric form.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericToken {
    /// Textual form, e.g. a whitespace-separated field from a data file.
    Text(String),
    /// Already-numeric form, rendered with `f64` formatting when scanned.
    Value(f64),
}

impl NumericToken {
    /// Parses the token as a decimal value.
    ///
    /// Returns `None` for text that does not parse as a number and for
    /// NaN. Such tokens are routine noise in scraped input and are
    /// excluded from the applicability check rather than reported as
    /// errors.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            NumericToken::Text(text) => text.trim().parse::<f64>().ok()?,
            NumericToken::Value(v) => *v,
        };
        (!v.is_nan()).then_some(v)
    }
}

impl fmt::Display for NumericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericToken::Text(text) => f.write_str(text),
            NumericToken::Value(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for NumericToken {
    fn from(text: &str) -> Self {
        NumericToken::Text(text.to_string())
    }
}

impl From<String> for NumericToken {
    fn from(text: String) -> Self {
        NumericToken::Text(text)
    }
}

impl From<f64> for NumericToken {
    fn from(v: f64) -> Self {
        NumericToken::Value(v)
    }
}

impl From<u64> for NumericToken {
    fn from(v: u64) -> Self {
        NumericToken::Value(v as f64)
    }
}
