use clap::Parser;

pub const PROMPT: &str = "Enter the name of a cryptocurrency (e.g., Bitcoin): ";

/// Startup banner: title block, info line, dashed rule.
pub fn header() -> String {
    let rule = "=".repeat(50);
    format!(
        "\n{rule}\n\
         📈 AI Cryptocurrency Analysis Agent 📈\n\
         {rule}\n\n\
         Info: This agent uses OpenAI for analysis. For more advanced, production-level agents,\n      \
         integrating services like Azure ML for model deployment and management is a great next step.\n\
         {}",
        "-".repeat(50)
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "coinsight",
    version,
    about = "Cryptocurrency market snapshot with an AI-written summary"
)]
pub struct Cli {
    /// Asset name or ticker symbol (e.g. bitcoin, BTC). Prompted for when omitted.
    pub asset: Option<String>,

    /// Chat model for the summary (overrides COINSIGHT_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}
