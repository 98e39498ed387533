use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZosmfError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("z/OSMF returned HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Unexpected response: {message}")]
    ResponseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Auth,
    Config,
    Data,
    System,
}

impl ZosmfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ZosmfError::ApiError(_) | ZosmfError::HttpError { .. } => ErrorCategory::Network,
            ZosmfError::AuthError { .. } => ErrorCategory::Auth,
            ZosmfError::ConfigError { .. }
            | ZosmfError::InvalidConfigValueError { .. }
            | ZosmfError::MissingConfigError { .. } => ErrorCategory::Config,
            ZosmfError::SerializationError(_) | ZosmfError::ResponseError { .. } => {
                ErrorCategory::Data
            }
            ZosmfError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ZosmfError::ApiError(_) => ErrorSeverity::Medium,
            ZosmfError::HttpError { status, .. } if *status == 401 || *status == 403 => {
                ErrorSeverity::High
            }
            ZosmfError::HttpError { .. } => ErrorSeverity::Medium,
            ZosmfError::AuthError { .. } => ErrorSeverity::High,
            ZosmfError::ResponseError { .. } | ZosmfError::SerializationError(_) => {
                ErrorSeverity::High
            }
            ZosmfError::ConfigError { .. }
            | ZosmfError::InvalidConfigValueError { .. }
            | ZosmfError::MissingConfigError { .. } => ErrorSeverity::High,
            ZosmfError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ZosmfError::ApiError(_) => {
                "Check that the z/OSMF host is reachable and the port is correct".to_string()
            }
            ZosmfError::HttpError { status, .. } if *status == 401 => {
                "Credentials were rejected; verify user/password or refresh the token".to_string()
            }
            ZosmfError::HttpError { status, .. } if *status == 404 => {
                "The resource does not exist on the host; check the path or dataset name"
                    .to_string()
            }
            ZosmfError::HttpError { .. } => {
                "Inspect the response body for the z/OSMF error message".to_string()
            }
            ZosmfError::AuthError { .. } => {
                "Provide either a token or a user/password pair in the profile".to_string()
            }
            ZosmfError::ResponseError { .. } => {
                "The host answered with an unexpected shape; verify the z/OSMF version".to_string()
            }
            ZosmfError::ConfigError { .. }
            | ZosmfError::InvalidConfigValueError { .. }
            | ZosmfError::MissingConfigError { .. } => "Fix the profile file and re-run".to_string(),
            ZosmfError::SerializationError(_) => {
                "The response could not be decoded; capture it with --verbose".to_string()
            }
            ZosmfError::IoError(_) => "Check local file permissions and disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZosmfError::ApiError(e) => format!("Could not reach z/OSMF: {}", e),
            ZosmfError::HttpError { status, .. } => {
                format!("z/OSMF rejected the request (HTTP {})", status)
            }
            ZosmfError::AuthError { message } => format!("Authentication failed: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZosmfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_is_high_severity() {
        let err = ZosmfError::AuthError {
            message: "no credentials".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Auth);
    }

    #[test]
    fn test_unauthorized_http_error_maps_to_high() {
        let err = ZosmfError::HttpError {
            status: 401,
            body: "{}".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("Credentials"));
    }

    #[test]
    fn test_config_errors_are_config_category() {
        let err = ZosmfError::MissingConfigError {
            field: "host".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
    }
}
