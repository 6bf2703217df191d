use crate::core::counter::Strategy;
use crate::core::output::OutputFormat;
use crate::core::{InputProvider, PairInput};
use crate::utils::error::{PairError, Result};
use crate::utils::validation::{validate_declared_len, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub divisor: Option<i32>,
    pub values: Option<Vec<i32>>,
    pub declared_len: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub strategy: Option<Strategy>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PairError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PairError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.output.as_ref().and_then(|o| o.strategy)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("input.divisor", &self.input.divisor)?;
        let values = validate_required_field("input.values", &self.input.values)?;
        validate_declared_len("input.declared_len", self.input.declared_len, values.len())
    }
}

impl InputProvider for TomlConfig {
    fn pair_input(&self) -> Result<PairInput> {
        let divisor = *validate_required_field("input.divisor", &self.input.divisor)?;
        let values = validate_required_field("input.values", &self.input.values)?.clone();

        Ok(PairInput {
            values,
            divisor,
            declared_len: self.input.declared_len,
        })
    }
}
