pub mod completion;
pub mod market_data;
