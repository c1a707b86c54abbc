use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ChartError {
    pub fn validation(message: impl Into<String>) -> Self {
        ChartError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ChartError::ValidationError { .. } => ErrorCategory::Input,
            ChartError::ConfigError { .. }
            | ChartError::ConfigValidationError { .. }
            | ChartError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ChartError::IoError(_) | ChartError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Bad input is re-promptable; broken config or I/O is not.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ChartError::ValidationError { .. } => ErrorSeverity::Medium,
            ChartError::ConfigError { .. }
            | ChartError::ConfigValidationError { .. }
            | ChartError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ChartError::IoError(_) | ChartError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChartError::ValidationError { message } => message.clone(),
            ChartError::ConfigError { .. }
            | ChartError::ConfigValidationError { .. }
            | ChartError::InvalidConfigValueError { .. } => {
                format!("The reading settings could not be used: {}", self)
            }
            ChartError::IoError(e) => format!("Could not access a file: {}", e),
            ChartError::SerializationError(e) => format!("Could not format the reading: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChartError::ValidationError { .. } => {
                "Enter your birth date as YYYY-MM-DD, for example 1990-03-21"
            }
            ChartError::ConfigError { .. }
            | ChartError::ConfigValidationError { .. }
            | ChartError::InvalidConfigValueError { .. } => {
                "Check the [reading] and [output] sections of your config file"
            }
            ChartError::IoError(_) => "Make sure the config path exists and is readable",
            ChartError::SerializationError(_) => "Try again with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
