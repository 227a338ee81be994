use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },

    #[error("No handler registered for route: {route}")]
    RouteNotFound { route: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Processing,
    Routing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::IoError(_) => ErrorCategory::Io,
            GatewayError::SerializationError(_) | GatewayError::Utf8Error(_) => {
                ErrorCategory::Processing
            }
            GatewayError::ConfigError { .. }
            | GatewayError::ConfigValidationError { .. }
            | GatewayError::InvalidConfigValueError { .. }
            | GatewayError::MissingConfigError { .. } => ErrorCategory::Config,
            GatewayError::ProcessingError { .. } => ErrorCategory::Processing,
            GatewayError::RouteNotFound { .. } => ErrorCategory::Routing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Routing => ErrorSeverity::Low,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GatewayError::IoError(_) => {
                "Check that the input path exists and is readable, and that the output directory is writable".to_string()
            }
            GatewayError::Utf8Error(_) => {
                "The rewriter only handles text files; make sure the input is UTF-8 HTML".to_string()
            }
            GatewayError::SerializationError(_) => {
                "Check the structure of the request/response payload".to_string()
            }
            GatewayError::ConfigError { .. }
            | GatewayError::ConfigValidationError { .. }
            | GatewayError::InvalidConfigValueError { .. }
            | GatewayError::MissingConfigError { .. } => {
                "Review the command-line arguments or the TOML config file".to_string()
            }
            GatewayError::ProcessingError { .. } => {
                "Inspect the input file contents and retry".to_string()
            }
            GatewayError::RouteNotFound { route } => {
                format!("Register a handler for {} before dispatching to it", route)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::IoError(e) => format!("File operation failed: {}", e),
            GatewayError::Utf8Error(_) => "Input file is not valid UTF-8 text".to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
