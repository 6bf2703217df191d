use crate::config::RunSettings;
use crate::config::toml_config::TomlConfig;
use crate::core::counter::Strategy;
use crate::core::output::OutputFormat;
use crate::core::{InputProvider, PairInput};
use crate::utils::error::Result;
use crate::utils::validation::{validate_declared_len, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "divisible-sum-pairs")]
#[command(about = "Count pairs whose sum is divisible by k")]
pub struct CliConfig {
    /// Divisor k (must be non-zero)
    #[arg(short = 'k', long, default_value_t = 3, allow_hyphen_values = true)]
    pub divisor: i32,

    /// Comma-separated input values
    #[arg(long, value_delimiter = ',', default_values_t = [1, 3, 2, 6, 1, 2], allow_hyphen_values = true)]
    pub values: Vec<i32>,

    /// Declared number of values, checked against --values
    #[arg(short = 'n', long)]
    pub declared_len: Option<usize>,

    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read input and output settings from a TOML file instead of flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges flags with the TOML file, if any. Explicit flags win for strategy and format.
    pub fn resolve(&self) -> Result<RunSettings> {
        let Some(path) = &self.config else {
            return Ok(RunSettings {
                input: self.pair_input()?,
                strategy: self.strategy.unwrap_or_default(),
                format: self.format.unwrap_or_default(),
            });
        };

        tracing::info!("Loading configuration from: {}", path);
        let file = TomlConfig::from_file(path)?;
        file.validate()?;

        Ok(RunSettings {
            input: file.pair_input()?,
            strategy: self.strategy.or(file.strategy()).unwrap_or_default(),
            format: self.format.or(file.format()).unwrap_or_default(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            return validate_path("config", path);
        }
        validate_declared_len("declared_len", self.declared_len, self.values.len())
    }
}

impl InputProvider for CliConfig {
    fn pair_input(&self) -> Result<PairInput> {
        Ok(PairInput {
            values: self.values.clone(),
            divisor: self.divisor,
            declared_len: self.declared_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_example() {
        let config = CliConfig::parse_from(["divisible-sum-pairs"]);
        assert!(config.validate().is_ok());

        let settings = config.resolve().unwrap();
        assert_eq!(settings.input.values, vec![1, 3, 2, 6, 1, 2]);
        assert_eq!(settings.input.divisor, 3);
        assert_eq!(settings.strategy, Strategy::BruteForce);
        assert_eq!(settings.format, OutputFormat::Plain);
    }

    #[test]
    fn test_parse_negative_values() {
        let config = CliConfig::parse_from([
            "divisible-sum-pairs",
            "-k",
            "-4",
            "--values",
            "-1,5,-3",
            "--strategy",
            "remainder",
            "--format",
            "json",
        ]);
        assert_eq!(config.divisor, -4);
        assert_eq!(config.values, vec![-1, 5, -3]);
        assert_eq!(config.strategy, Some(Strategy::Remainder));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_declared_len_mismatch() {
        let config = CliConfig::parse_from(["divisible-sum-pairs", "--values", "1,2", "-n", "3"]);
        assert!(config.validate().is_err());
    }
}
