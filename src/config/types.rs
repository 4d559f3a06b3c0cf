// Configuration type definitions

use std::num::NonZeroUsize;

use clap::ValueEnum;
use serde::Deserialize;

/// Report format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Analysis tunables section
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSection {
    #[serde(default = "default_batch_size")]
    pub batch_size: NonZeroUsize,
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
}

fn default_batch_size() -> NonZeroUsize {
    crate::engine::DEFAULT_BATCH_SIZE
}

fn default_significance_level() -> f64 {
    crate::analyzer::DEFAULT_SIGNIFICANCE_LEVEL
}

impl Default for AnalysisSection {
    fn default() -> Self {
        AnalysisSection {
            batch_size: default_batch_size(),
            significance_level: default_significance_level(),
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputSection {
    fn default() -> Self {
        OutputSection {
            format: OutputFormat::Table,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub output: OutputSection,
}
