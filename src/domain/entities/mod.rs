pub mod analysis;
pub mod market_snapshot;
