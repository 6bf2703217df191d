use crate::core::PairReport;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare count
    #[default]
    Plain,
    Json,
}

impl PairReport {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.count.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
