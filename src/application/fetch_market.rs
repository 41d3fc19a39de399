use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketDataSource;
use crate::domain::values::asset::{display_name, AssetId};
use std::sync::Arc;

/// Quotes are always requested in US dollars.
pub const QUOTE_CURRENCY: &str = "usd";

pub struct FetchMarketUseCase {
    source: Arc<dyn MarketDataSource>,
}

impl FetchMarketUseCase {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    /// Resolve `input` to an asset id and fetch one snapshot. No retries.
    pub async fn execute(&self, input: &str) -> Result<MarketSnapshot, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::InvalidInput("asset name is empty".into()));
        }

        tracing::info!("Fetching market data for {}...", display_name(input));
        let asset = AssetId::resolve(input);
        tracing::info!("Using {} ID: {asset}", self.source.name());

        self.source.fetch(&asset, QUOTE_CURRENCY).await.map_err(|e| match e {
            DomainError::NotFound(_) => DomainError::NotFound(format!(
                "Could not find data for '{}'. Please check the name and try again.",
                input.trim()
            )),
            other => other,
        })
    }
}
