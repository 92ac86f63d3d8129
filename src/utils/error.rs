use thiserror::Error;

/// Infrastructure failures: configuration, IO and persistence.
///
/// Rule outcomes live in `RegisterError`; these never reach a registration
/// caller directly.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Repository error: {message}")]
    RepositoryError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Data,
}

impl ServiceError {
    pub fn repository(message: impl Into<String>) -> Self {
        Self::RepositoryError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::RepositoryError { .. } => ErrorCategory::Storage,
            Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("配置有誤: {}", self),
            ErrorCategory::Storage => format!("無法存取講者資料: {}", self),
            ErrorCategory::Data => format!("資料格式錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the TOML syntax and field names in the configuration file"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Fix the reported value; list entries must not be blank and fee tiers must ascend"
            }
            Self::IoError(_) => "Make sure the file exists and the path is readable/writable",
            Self::SerializationError(_) => "Make sure the input is valid JSON in the expected shape",
            Self::RepositoryError { .. } => "Retry the registration once the store is available",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = ServiceError::MissingConfigError {
            field: "repository.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("repository.path"));

        let err = ServiceError::repository("disk full");
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.to_string(), "Repository error: disk full");

        let err: ServiceError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Data);
    }
}
