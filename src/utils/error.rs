use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairError {
    #[error("Invalid divisor: k must be non-zero")]
    InvalidDivisor,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl PairError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PairError::InvalidDivisor => "Pass a non-zero divisor with --divisor",
            PairError::IoError(_) => "Check that the config file exists and is readable",
            PairError::SerializationError(_) => "Retry with --format plain",
            PairError::ConfigError { .. } => "Make sure the config file is valid TOML",
            PairError::InvalidConfigValueError { .. } => {
                "Fix the reported field and run again"
            }
            PairError::MissingConfigError { .. } => "Add the missing field to the config file",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PairError::InvalidDivisor => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PairError>;
