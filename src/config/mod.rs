#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::counter::Strategy;
use crate::core::output::OutputFormat;
use crate::core::PairInput;

/// Everything one run needs, after flags and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PairInput,
    pub strategy: Strategy,
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
