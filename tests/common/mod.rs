//! Shared test helpers: scripted market data and completion providers.

#![allow(dead_code)]

use async_trait::async_trait;
use coinsight::domain::entities::market_snapshot::MarketSnapshot;
use coinsight::domain::error::DomainError;
use coinsight::domain::ports::completion::{CompletionProvider, CompletionRequest};
use coinsight::domain::ports::market_data::MarketDataSource;
use coinsight::domain::values::asset::AssetId;
use coinsight::domain::values::retry_policy::RetryPolicy;
use coinsight::infrastructure::feeds::coingecko::parse_snapshot;
use coinsight::CoinSight;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Answers every fetch from a fixed `simple/price` style JSON body.
pub struct MockMarketData {
    body: Result<serde_json::Value, u16>,
    requested: Mutex<Vec<String>>,
}

impl MockMarketData {
    pub fn with_body(body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            body: Ok(body),
            requested: Mutex::new(Vec::new()),
        })
    }

    /// Every request fails with this HTTP status.
    pub fn with_status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            body: Err(status),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, asset: &AssetId, currency: &str) -> Result<MarketSnapshot, DomainError> {
        self.requested.lock().unwrap().push(asset.to_string());
        match &self.body {
            Ok(body) => parse_snapshot(body, asset, currency),
            Err(status) => Err(DomainError::Http {
                status: *status,
                body: "upstream unavailable".into(),
            }),
        }
    }
}

/// Replays scripted responses in order and counts calls.
pub struct MockCompletion {
    responses: Mutex<VecDeque<Result<String, DomainError>>>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockCompletion {
    pub fn scripted(responses: Vec<Result<String, DomainError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::scripted(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Arc<Self> {
        Self::scripted(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    fn name(&self) -> &str {
        "mock-llm"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Network("connection refused".into())))
    }
}

pub fn bitcoin_body() -> serde_json::Value {
    serde_json::json!({"bitcoin": {"usd": 65000, "usd_market_cap": 1280000000000u64}})
}

pub fn setup(
    market: Arc<MockMarketData>,
    completion: Option<Arc<MockCompletion>>,
) -> CoinSight {
    CoinSight::with_providers(
        market,
        completion.map(|c| c as Arc<dyn CompletionProvider>),
        RetryPolicy::default(),
    )
}
