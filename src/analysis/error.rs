use thiserror::Error;

/// Why an analysis request produced no result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The service answered with a non-success status.
    #[error("analysis service returned {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Remote {
        status: u16,
        /// The service's `error` text, if it sent one.
        message: Option<String>,
    },

    /// The request never produced a readable response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the contract.
    #[error("malformed analysis response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request task ended without delivering an outcome.
    #[error("analysis ended without a response")]
    Aborted,
}

impl AnalysisError {
    /// Text to show the user: the service's own message when there is one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AnalysisError::Remote {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
