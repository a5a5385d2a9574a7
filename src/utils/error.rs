use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid interval: {message}")]
    InvalidInterval { message: String },

    #[error("Unknown vehicle class: {class}")]
    UnknownVehicleClass { class: String },

    #[error("Invalid extension hours '{value}': {reason}")]
    InvalidExtensionHours { value: String, reason: String },

    #[error("Invalid time '{value}': expected YYYY-MM-DDTHH:MM")]
    InvalidTimestamp { value: String },

    #[error("Remote service error: {message}")]
    RemoteService { message: String },

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing config value: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User fixes it by re-editing inputs.
    Low,
    /// Transient remote failure, worth retrying.
    Medium,
    /// Configuration or environment problem.
    High,
}

impl GateError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GateError::InvalidInterval { .. }
            | GateError::UnknownVehicleClass { .. }
            | GateError::InvalidExtensionHours { .. }
            | GateError::InvalidTimestamp { .. } => ErrorSeverity::Low,
            GateError::ApiError(_) | GateError::RemoteService { .. } => ErrorSeverity::Medium,
            GateError::IoError(_)
            | GateError::SerializationError(_)
            | GateError::TomlError(_)
            | GateError::InvalidConfigValue { .. }
            | GateError::MissingConfig { .. } => ErrorSeverity::High,
        }
    }

    /// True for errors the user caused locally; these never trigger a
    /// network call and are shown as-is.
    pub fn is_validation(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    /// Message safe to show the user. Remote failures are collapsed into a
    /// generic retry suggestion; details go to the operator log only.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GateError::ApiError(_) | GateError::RemoteService { .. } => {
                "Service temporarily unavailable. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.severity() {
            ErrorSeverity::Low => "Adjust the entered values and try again",
            ErrorSeverity::Medium => "Check the service is reachable and retry",
            ErrorSeverity::High => "Check the configuration file and CLI flags",
        }
    }
}
