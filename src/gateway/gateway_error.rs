use thiserror::Error;

/// Failures surfaced by the listings gateway. Each one is reported once;
/// nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request never got a response (connect, timeout, broken stream).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success status, or a success whose body could not be read.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The service rejected a submitted payload.
    #[error("Rejected: {0}")]
    Validation(String),

    #[error("Listing not found: {0}")]
    NotFound(String),
}

impl GatewayError {
    /// Short text suitable for showing to the person using the site.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Transport(_) => {
                "The listings service could not be reached. Please try again.".to_string()
            }
            GatewayError::Server { .. } => {
                "The listings service ran into a problem. Please try again.".to_string()
            }
            GatewayError::Validation(msg) => format!("The listing was rejected: {msg}"),
            GatewayError::NotFound(_) => "This listing could not be found.".to_string(),
        }
    }
}
