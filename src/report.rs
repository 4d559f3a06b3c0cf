//! Presentation layer.
//!
//! Everything user-facing derives from the verdict, the histogram, and
//! the provenance mode. The statistical core produces no prose; the
//! wording lives here so hosts can swap it out wholesale.

mod catalog;
mod json;
mod table;

pub use catalog::explanation;
pub use json::render_json;
pub use table::render_table;

use clap::ValueEnum;
use serde::Serialize;

/// Where the token sequence came from.
///
/// Opaque to the engine and to the verdict; it selects interpretive
/// wording only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Numbers captured from text
    #[default]
    Text,
    /// Transform coefficients extracted from a compressed image
    Raw,
    /// Raw pixel channel samples
    Pixel,
}
