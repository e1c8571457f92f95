use serde::Serialize;

/// Standard `{"message": ...}` envelope used by mutation endpoints and
/// error responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
