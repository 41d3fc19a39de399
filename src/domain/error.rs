use thiserror::Error;

/// Message fragment the completion API uses when an account is out of credit.
const QUOTA_MESSAGE: &str = "exceeded your current quota";

/// Error code the completion API attaches to quota failures.
const QUOTA_CODE: &str = "insufficient_quota";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Completion error: {message}")]
    Completion {
        message: String,
        code: Option<String>,
    },
}

impl DomainError {
    /// True when the failure means the completion account has no quota left.
    ///
    /// Checks the structured error code first and falls back to matching the
    /// provider's message text.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            DomainError::Completion { code: Some(code), .. } if code == QUOTA_CODE => true,
            DomainError::Completion { message, .. } => message.contains(QUOTA_MESSAGE),
            DomainError::Http { body, .. } => {
                body.contains(QUOTA_CODE) || body.contains(QUOTA_MESSAGE)
            }
            other => other.to_string().contains(QUOTA_MESSAGE),
        }
    }
}
