use crate::config::API_KEY_VAR;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::market_snapshot::MarketSnapshot;
use chrono::{DateTime, Utc};
use std::fmt;

const RULE: &str = "==================================================";

pub const NO_ANALYSIS: &str = "No analysis was generated.";

pub const QUOTA_HINT: &str = "ℹ️ Suggestion: Your OpenAI API key may have exhausted its quota.\n\
     Visit https://platform.openai.com/account/billing to check your usage and limits.";

/// Everything one run produced, ready to print.
#[derive(Debug)]
pub struct Report {
    pub asset_name: String,
    pub snapshot: MarketSnapshot,
    pub analysis: AnalysisResult,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(asset_name: String, snapshot: MarketSnapshot, analysis: AnalysisResult) -> Self {
        Self {
            asset_name,
            snapshot,
            analysis,
            generated_at: Utc::now(),
        }
    }

    /// Diagnostics to show before the report: the credential box when no
    /// key was configured, the billing hint when the quota ran out.
    pub fn notices(&self) -> Vec<String> {
        match &self.analysis {
            AnalysisResult::MissingCredential => vec![missing_credential_notice()],
            AnalysisResult::Failed {
                quota_exhausted: true,
                ..
            } => vec![QUOTA_HINT.to_string()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "📊 Analysis Report for {}", self.asset_name)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f)?;
        writeln!(f, "--- Market Data ---")?;
        writeln!(f)?;
        writeln!(f, "   Current Price: {}", self.snapshot.price_display())?;
        writeln!(f, "   Market Cap:    {}", self.snapshot.market_cap_display())?;
        writeln!(f)?;
        writeln!(f, "--- AI-Generated Summary ---")?;
        writeln!(f)?;
        match self.analysis.text() {
            Some(text) => writeln!(f, "{}", text.trim())?,
            None => writeln!(f, "   {NO_ANALYSIS}")?,
        }
        writeln!(f)?;
        write!(f, "{RULE}")
    }
}

/// Boxed message shown when the completion credential is not configured.
pub fn missing_credential_notice() -> String {
    format!(
        "{RULE}\n\
         🔴 FATAL ERROR: {API_KEY_VAR} not found!\n\
         Please set your OpenAI API key using:\n\
         export {API_KEY_VAR}=your_api_key_here\n\
         {RULE}"
    )
}
