use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Projection engine error: {0}")]
    ProjectionError(#[from] proj4rs::errors::Error),

    #[error("Invalid spatial reference '{definition}': {reason}")]
    SpatialRefError { definition: String, reason: String },

    #[error("Buffer generation error: {message}")]
    BufferError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Geoprocessing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported for this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::ProjectionError(_)
            | ToolError::SpatialRefError { .. }
            | ToolError::BufferError { .. } => ErrorCategory::Geoprocessing,
            ToolError::IoError(_) | ToolError::SerializationError(_) => ErrorCategory::System,
            ToolError::ConfigError { .. }
            | ToolError::MissingConfigError { .. }
            | ToolError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ToolError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Geoprocessing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::ProjectionError(e) => {
                format!("The projection engine rejected the operation: {}", e)
            }
            ToolError::SpatialRefError { definition, reason } => {
                format!(
                    "The spatial reference '{}' could not be parsed: {}",
                    definition, reason
                )
            }
            ToolError::BufferError { message } => format!("Buffer generation failed: {}", message),
            ToolError::IoError(e) => format!("A file operation failed: {}", e),
            ToolError::SerializationError(e) => {
                format!("Writing the output artifact failed: {}", e)
            }
            ToolError::ConfigError { message } => format!("Configuration problem: {}", message),
            ToolError::MissingConfigError { field } => {
                format!("The required setting '{}' is missing", field)
            }
            ToolError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            ToolError::ValidationError { message } => {
                format!("Input validation failed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags or the scenario file against --help"
            }
            ErrorCategory::Validation => "Correct the input values and run the tool again",
            ErrorCategory::Geoprocessing => {
                "Verify the coordinates, distances and spatial reference definition"
            }
            ErrorCategory::System => {
                "Check file permissions and free disk space for the output directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
