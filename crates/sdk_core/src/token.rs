use crate::constants::TEN;
use ethnum::U256;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

// TODO: add token icon url metadata
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Token {
    pub address: String,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub display_name: Option<String>,
}

impl Token {
    pub fn new(
        address: impl Into<String>,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            decimals,
            name: name.into(),
            symbol: symbol.into(),
            display_name: None,
        }
    }

    /// The symbol shown in the UI. Prefers the display name when one is configured.
    pub fn display_symbol(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.symbol)
    }

    /// Number of smallest units in one whole token.
    pub fn decimal_scale(&self) -> U256 {
        TEN.pow(self.decimals as u32)
    }
}

// Two tokens are the same currency if they live at the same address.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_address() {
        let a = Token::new("secret1abc", 6, "USDC", "USD Coin");
        let mut b = a.clone();
        b.symbol = "USDC.axl".to_string();
        assert_eq!(a, b);

        let c = Token::new("secret1def", 6, "USDC", "USD Coin");
        assert_ne!(a, c);
    }

    #[test]
    fn deserializes_from_token_list_entry() {
        let json = r#"{
            "address": "secret1k0jntykt7e4g3y88ltc60czgjuqdy4c9e8fzek",
            "decimals": 6,
            "name": "Secret SCRT",
            "symbol": "SSCRT",
            "display_name": "sSCRT"
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.decimals, 6);
        assert_eq!(token.display_symbol(), "sSCRT");
        assert_eq!(token.to_string(), "sSCRT");
        assert_eq!(token.decimal_scale(), U256::new(1_000_000));
    }
}
