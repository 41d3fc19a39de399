use crate::domain::values::asset::AssetId;
use crate::domain::values::money::{format_market_cap, format_price};
use rust_decimal::Decimal;

/// Point-in-time price and market cap for one asset. Either value may be
/// missing from the upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub asset_id: AssetId,
    pub currency: String,
    pub price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
}

impl MarketSnapshot {
    pub fn new(
        asset_id: AssetId,
        currency: impl Into<String>,
        price: Option<Decimal>,
        market_cap: Option<Decimal>,
    ) -> Self {
        Self {
            asset_id,
            currency: currency.into(),
            price,
            market_cap,
        }
    }

    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    pub fn market_cap_display(&self) -> String {
        format_market_cap(self.market_cap)
    }
}
