use thiserror::Error;

/// Unified error type for the entire pension-planner-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Pension not found: {0}")]
    PensionNotFound(i64),

    #[error("Statement not found: {0}")]
    StatementNotFound(i64),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// HTTP status carried by an `Api` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for errors caused by the backend rejecting or not knowing
    /// the resource, as opposed to transport-level failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::Api { status: 404, .. }
                | CoreError::PensionNotFound(_)
                | CoreError::StatementNotFound(_)
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // tokens embedded in request URLs never reach logs or toasts.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
