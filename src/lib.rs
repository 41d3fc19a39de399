pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalyzeUseCase;
use crate::application::fetch_market::FetchMarketUseCase;
use crate::application::report::Report;
use crate::config::Config;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::completion::CompletionProvider;
use crate::domain::ports::market_data::MarketDataSource;
use crate::domain::values::asset::display_name;
use crate::domain::values::retry_policy::RetryPolicy;
use crate::infrastructure::feeds::coingecko::CoinGeckoFeed;
use crate::infrastructure::llm::openai::OpenAiCompletion;
use std::sync::Arc;

/// How a single fetch-and-summarize run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input was blank; nothing was fetched.
    NoInput,
    /// Market data could not be fetched; the narrative step was skipped.
    NoData(DomainError),
    Report(Report),
}

pub struct CoinSight {
    fetch_market_uc: FetchMarketUseCase,
    analyze_uc: AnalyzeUseCase,
}

impl CoinSight {
    pub fn new(config: &Config) -> Self {
        let market: Arc<dyn MarketDataSource> =
            Arc::new(CoinGeckoFeed::new(Some(config.price_api_url.clone())));

        let completion = config.openai_api_key.clone().map(|key| {
            let client = OpenAiCompletion::new(key, Some(config.model.clone()))
                .with_endpoint(config.completion_url.clone())
                .with_temperature(config.temperature)
                .with_max_tokens(config.max_tokens)
                .with_timeout(config.request_timeout);
            Arc::new(client) as Arc<dyn CompletionProvider>
        });

        Self::with_providers(market, completion, config.retry)
    }

    pub fn with_providers(
        market: Arc<dyn MarketDataSource>,
        completion: Option<Arc<dyn CompletionProvider>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            fetch_market_uc: FetchMarketUseCase::new(market),
            analyze_uc: AnalyzeUseCase::new(completion, retry),
        }
    }

    pub async fn fetch_market(&self, input: &str) -> Result<MarketSnapshot, DomainError> {
        self.fetch_market_uc.execute(input).await
    }

    pub async fn analyze(&self, asset_name: &str, snapshot: &MarketSnapshot) -> AnalysisResult {
        self.analyze_uc.execute(asset_name, snapshot).await
    }

    /// Fetch, then summarize. A fetch failure stops the run before any
    /// completion request is made; a failed summary still yields a report.
    pub async fn run(&self, input: &str) -> RunOutcome {
        if input.trim().is_empty() {
            return RunOutcome::NoInput;
        }

        let snapshot = match self.fetch_market(input).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::debug!("market data fetch failed: {e:?}");
                return RunOutcome::NoData(e);
            }
        };

        let asset_name = display_name(input);
        let analysis = self.analyze(&asset_name, &snapshot).await;
        RunOutcome::Report(Report::new(asset_name, snapshot, analysis))
    }
}
