use crate::domain::error::DomainError;

/// Outcome of asking the completion API for a narrative.
#[derive(Debug)]
pub enum AnalysisResult {
    Generated(String),
    /// No API key configured; nothing was sent.
    MissingCredential,
    /// Every attempt failed. `error` is the last failure.
    Failed {
        attempts: u32,
        error: DomainError,
        quota_exhausted: bool,
    },
}

impl AnalysisResult {
    pub fn failed(attempts: u32, error: DomainError) -> Self {
        let quota_exhausted = error.is_quota_exhausted();
        AnalysisResult::Failed {
            attempts,
            error,
            quota_exhausted,
        }
    }

    /// The narrative text, if one was produced.
    pub fn text(&self) -> Option<&str> {
        match self {
            AnalysisResult::Generated(text) => Some(text),
            _ => None,
        }
    }
}
