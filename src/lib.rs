pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, RunSettings};
pub use crate::core::counter::{divisible_sum_pairs, BruteForceCounter, RemainderCounter, Strategy};
pub use crate::core::engine::CountEngine;
pub use crate::core::output::OutputFormat;
pub use crate::domain::model::{PairInput, PairReport};
pub use crate::domain::ports::{InputProvider, PairCounter};
pub use crate::utils::error::{PairError, Result};
