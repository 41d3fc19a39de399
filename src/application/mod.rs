pub mod analyze;
pub mod fetch_market;
pub mod prompt;
pub mod report;
