/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, ServiceObjectError>;

/// Hard failures of a service object invocation.
///
/// Domain failures never show up here: they are recorded as
/// [`ErrorRecord`](crate::core::ErrorRecord)s and inspected through
/// `success()` / `errors()`.
#[derive(thiserror::Error, Debug)]
pub enum ServiceObjectError {
    /// The operation hook was never overridden
    #[error("Not implemented: `call` must be implemented by {service}")]
    NotImplemented { service: String },

    /// A dynamic error record was not an object with a string `message`
    #[error(
        "Invalid error type. Valid error types are objects with a 'message' field. Received type '{received}'"
    )]
    InvalidErrorType { received: String },

    /// A previous invocation of this service aborted with a hard failure
    #[error("Aborted: {service} already failed and will not be re-run")]
    Aborted { service: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything the operation hook chose not to absorb into its errors
    #[error(transparent)]
    Operation(#[from] anyhow::Error),
}

// Helper functions for common error scenarios
impl ServiceObjectError {
    pub fn not_implemented(service: impl Into<String>) -> Self {
        ServiceObjectError::NotImplemented {
            service: service.into(),
        }
    }

    pub fn invalid_error_type(received: impl Into<String>) -> Self {
        ServiceObjectError::InvalidErrorType {
            received: received.into(),
        }
    }

    pub fn aborted(service: impl Into<String>) -> Self {
        ServiceObjectError::Aborted {
            service: service.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ServiceObjectError::Configuration(msg.into())
    }

    /// True for the error returned by an unoverridden operation hook
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ServiceObjectError::NotImplemented { .. })
    }
}
