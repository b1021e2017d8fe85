use thiserror::Error;

/// Why a lookup failed.
///
/// The variants only matter for logs: the view state shows the same
/// localized message for all of them.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request to weather service failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("weather service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("weather service returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LookupError {
    /// True when the service said the city does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Status { status: 404, .. })
    }
}
