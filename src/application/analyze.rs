use crate::application::prompt::build_request;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::ports::completion::CompletionProvider;
use crate::domain::values::retry_policy::RetryPolicy;
use std::sync::Arc;

pub struct AnalyzeUseCase {
    /// `None` when no credential is configured.
    provider: Option<Arc<dyn CompletionProvider>>,
    retry: RetryPolicy,
}

impl AnalyzeUseCase {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Ask the completion provider for a narrative about the snapshot.
    /// Never fails: errors are folded into the returned `AnalysisResult`.
    pub async fn execute(&self, asset_name: &str, snapshot: &MarketSnapshot) -> AnalysisResult {
        let Some(provider) = &self.provider else {
            return AnalysisResult::MissingCredential;
        };

        tracing::info!("Connecting to {} for analysis... Please wait.", provider.name());
        let request = build_request(asset_name, snapshot);

        let mut attempt = 1;
        loop {
            match provider.complete(&request).await {
                Ok(text) => return AnalysisResult::Generated(text),
                Err(e) if self.retry.should_retry(attempt) => {
                    tracing::warn!("Attempt {attempt} failed, retrying... ({e})");
                    let backoff = self.retry.backoff();
                    if !backoff.is_zero() {
                        tokio::time::sleep(backoff).await;
                    }
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("An error occurred with the {} API: {e}", provider.name());
                    return AnalysisResult::failed(attempt, e);
                }
            }
        }
    }
}
