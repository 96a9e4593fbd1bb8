use thiserror::Error;

/// Errors surfaced by the task-update API transport.
///
/// Classification happens here, once, so callers never inspect raw HTTP
/// statuses: expired sessions become `AuthenticationExpired`, everything
/// else is either a server rejection with the server's own message or a
/// transport-level failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("authentication expired")]
    AuthenticationExpired,

    #[error("server rejected request ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response payload: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<ApiError> for crate::error::WizoneError {
    fn from(err: ApiError) -> Self {
        crate::error::WizoneError::ApiError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_server_message() {
        let err = ApiError::Server {
            status: 400,
            message: "Completion note is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server rejected request (400): Completion note is required"
        );
    }
}
