use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Body returned by every submission and admin endpoint, success or failure
#[derive(Object, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    /// Human-readable outcome, shown to the user verbatim
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
