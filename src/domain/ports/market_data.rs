use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::asset::AssetId;
use async_trait::async_trait;

/// Source of current price and market cap quotes.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Name of this source for logging (e.g., "coingecko").
    fn name(&self) -> &str;

    /// Fetch a snapshot for `asset` quoted in `currency` (e.g., "usd").
    ///
    /// Returns `DomainError::NotFound` when the source has no entry for the
    /// asset.
    async fn fetch(&self, asset: &AssetId, currency: &str) -> Result<MarketSnapshot, DomainError>;
}
