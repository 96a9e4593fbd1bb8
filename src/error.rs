use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WizoneError {
    StateTransitionError(String),
    ValidationError(String),
    ApiError(String),
    EventError(String),
    ConfigurationError(String),
    CacheError(String),
}

impl fmt::Display for WizoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizoneError::StateTransitionError(msg) => write!(f, "State transition error: {msg}"),
            WizoneError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            WizoneError::ApiError(msg) => write!(f, "API error: {msg}"),
            WizoneError::EventError(msg) => write!(f, "Event error: {msg}"),
            WizoneError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            WizoneError::CacheError(msg) => write!(f, "Cache error: {msg}"),
        }
    }
}

impl std::error::Error for WizoneError {}

pub type Result<T> = std::result::Result<T, WizoneError>;
