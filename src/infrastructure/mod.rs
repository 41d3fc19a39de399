pub mod feeds;
pub mod llm;
