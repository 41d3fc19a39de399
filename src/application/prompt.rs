use crate::domain::entities::market_snapshot::MarketSnapshot;
use crate::domain::ports::completion::CompletionRequest;

pub const SYSTEM_MESSAGE: &str = "You are a helpful financial analyst for beginners.";

/// User prompt asking for a short analysis and a one-word sentiment.
pub fn build_prompt(asset_name: &str, snapshot: &MarketSnapshot) -> String {
    format!(
        "You are a financial analyst providing a very brief, easy-to-understand summary for a beginner.\n\
         Analyze the cryptocurrency '{asset_name}' based on the following data:\n\
         - Current Price: {price}\n\
         - Market Cap: {market_cap}\n\
         \n\
         Please provide the following in two distinct sections:\n\
         \n\
         1.  **Brief Analysis:** In 2-3 sentences, explain what this cryptocurrency is and what the data might suggest in simple terms.\n\
         2.  **Overall Sentiment:** Based on general market knowledge and recent news (as of your last update), state the sentiment as a single word: Positive, Neutral, or Negative. Then, add one sentence explaining why.\n\
         \n\
         Keep your response concise and focused on the provided data.",
        price = snapshot.price_display(),
        market_cap = snapshot.market_cap_display(),
    )
}

pub fn build_request(asset_name: &str, snapshot: &MarketSnapshot) -> CompletionRequest {
    CompletionRequest::new(SYSTEM_MESSAGE, build_prompt(asset_name, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::asset::AssetId;
    use rust_decimal::Decimal;

    #[test]
    fn test_prompt_embeds_formatted_values() {
        let snap = MarketSnapshot::new(
            AssetId::resolve("eth"),
            "usd",
            Some(Decimal::from(3500)),
            Some(Decimal::from(2_500_000_000u64)),
        );
        let prompt = build_prompt("Eth", &snap);
        assert!(prompt.contains("'Eth'"));
        assert!(prompt.contains("- Current Price: $3,500"));
        assert!(prompt.contains("- Market Cap: $2.50B"));
        assert!(prompt.contains("Positive, Neutral, or Negative"));
    }

    #[test]
    fn test_prompt_with_missing_values() {
        let snap = MarketSnapshot::new(AssetId::resolve("obscure"), "usd", None, None);
        let prompt = build_prompt("Obscure", &snap);
        assert!(prompt.contains("- Current Price: N/A"));
        assert!(prompt.contains("- Market Cap: N/A"));
    }

    #[test]
    fn test_request_uses_system_message() {
        let snap = MarketSnapshot::new(AssetId::resolve("sol"), "usd", None, None);
        let req = build_request("Sol", &snap);
        assert_eq!(req.system, SYSTEM_MESSAGE);
        assert!(req.prompt.contains("'Sol'"));
    }
}
