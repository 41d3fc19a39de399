pub mod asset;
pub mod money;
pub mod retry_policy;
