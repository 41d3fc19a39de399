use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Common ticker symbols and their CoinGecko identifiers.
const KNOWN_SYMBOLS: &[(&str, &str)] = &[
    ("btc", "bitcoin"),
    ("eth", "ethereum"),
    ("doge", "dogecoin"),
    ("dot", "polkadot"),
    ("ada", "cardano"),
    ("sol", "solana"),
    ("xrp", "ripple"),
];

/// Canonical price-API identifier for an asset (e.g. "bitcoin").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Resolve free text to an identifier. Known symbols map to their full
    /// name; anything else is passed through lowercased.
    pub fn resolve(input: &str) -> Self {
        let lowered = input.trim().to_lowercase();
        let id = KNOWN_SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == lowered)
            .map(|(_, id)| (*id).to_string())
            .unwrap_or(lowered);
        AssetId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssetId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetId::resolve(s))
    }
}

/// Title-case the user's input for headings: "bitcoin cash" -> "Bitcoin Cash".
pub fn display_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
