use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketDataSource;
use crate::domain::values::asset::AssetId;
use async_trait::async_trait;
use reqwest::Url;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko `simple/price` quotes (public, no API key).
pub struct CoinGeckoFeed {
    base_url: String,
    client: reqwest::Client,
}

impl CoinGeckoFeed {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client: reqwest::Client::builder()
                .user_agent(concat!("coinsight/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    fn price_url(&self, asset: &AssetId, currency: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&format!("{}/simple/price", self.base_url))
            .map_err(|e| DomainError::Config(format!("Invalid price API URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("ids", asset.as_str())
            .append_pair("vs_currencies", currency)
            .append_pair("include_market_cap", "true");
        Ok(url)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoFeed {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn fetch(&self, asset: &AssetId, currency: &str) -> Result<MarketSnapshot, DomainError> {
        let url = self.price_url(asset, currency)?;
        tracing::debug!(%url, "requesting price");

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Http { status, body });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        parse_snapshot(&body, asset, currency)
    }
}

/// Extract one asset's quote from a `{"<id>": {"usd": .., "usd_market_cap": ..}}` body.
pub fn parse_snapshot(body: &Value, asset: &AssetId, currency: &str) -> Result<MarketSnapshot, DomainError> {
    let quotes = body
        .as_object()
        .ok_or_else(|| DomainError::Parse("Price response is not a JSON object".into()))?;

    let quote = quotes
        .get(asset.as_str())
        .ok_or_else(|| DomainError::NotFound(format!("No price data for '{asset}'")))?;

    let price = quote.get(currency).and_then(to_decimal);
    let market_cap = quote
        .get(format!("{currency}_market_cap").as_str())
        .and_then(to_decimal);

    Ok(MarketSnapshot::new(asset.clone(), currency, price, market_cap))
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bitcoin() -> AssetId {
        AssetId::resolve("btc")
    }

    #[test]
    fn test_feed_creation() {
        let feed = CoinGeckoFeed::new(None);
        assert_eq!(feed.name(), "coingecko");
        assert_eq!(feed.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_price_url_query() {
        let feed = CoinGeckoFeed::new(Some("http://localhost:9000/api/v3/".into()));
        let url = feed.price_url(&bitcoin(), "usd").unwrap();
        assert_eq!(url.path(), "/api/v3/simple/price");
        assert_eq!(
            url.query(),
            Some("ids=bitcoin&vs_currencies=usd&include_market_cap=true")
        );
    }

    #[test]
    fn test_parse_full_quote() {
        let body = json!({"bitcoin": {"usd": 65000, "usd_market_cap": 1280000000000u64}});
        let snap = parse_snapshot(&body, &bitcoin(), "usd").unwrap();
        assert_eq!(snap.price, Some(Decimal::from(65000)));
        assert_eq!(snap.market_cap, Some(Decimal::from(1_280_000_000_000u64)));
        assert_eq!(snap.price_display(), "$65,000");
        assert_eq!(snap.market_cap_display(), "$1280.00B");
    }

    #[test]
    fn test_parse_fractional_price() {
        let body = json!({"bitcoin": {"usd": 0.0712}});
        let snap = parse_snapshot(&body, &bitcoin(), "usd").unwrap();
        assert_eq!(snap.price, Decimal::from_str("0.0712").ok());
        assert_eq!(snap.market_cap, None);
    }

    #[test]
    fn test_parse_partial_and_null_fields() {
        let body = json!({"bitcoin": {"usd": null, "usd_market_cap": "oops"}});
        let snap = parse_snapshot(&body, &bitcoin(), "usd").unwrap();
        assert_eq!(snap.price, None);
        assert_eq!(snap.market_cap, None);
        assert_eq!(snap.price_display(), "N/A");
    }

    #[test]
    fn test_parse_missing_asset() {
        let body = json!({});
        let err = parse_snapshot(&body, &bitcoin(), "usd").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_parse_non_object_body() {
        let body = json!([1, 2, 3]);
        let err = parse_snapshot(&body, &bitcoin(), "usd").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
