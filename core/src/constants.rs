use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};
use swap_sdk_core::Token;
use tracing::debug;

// Compile-time configuration for chain and token list
pub const CHAIN_ID: &'static str = if cfg!(feature = "mainnet") {
    "secret-4"
} else if cfg!(feature = "testnet") {
    "pulsar-3"
} else {
    "secretdev-1"
};

/// Symbol of the USD-pegged token used to value trades in fiat.
pub const USD_STABLECOIN: &str = "USDC";

fn parse_token_list(json: &str) -> Arc<HashMap<String, Token>> {
    let tokens: Vec<Token> = serde_json::from_str(json).expect("Failed to deserialize token list");

    let mut token_map: HashMap<String, Token> = HashMap::new();

    for token in tokens {
        token_map.insert(token.address.clone(), token);
    }

    debug!("loaded {} tokens", token_map.len());

    Arc::new(token_map)
}

pub static DEV_TOKEN_MAP: LazyLock<Arc<HashMap<String, Token>>> = LazyLock::new(|| {
    parse_token_list(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/tokens_dev.json"
    )))
});

pub static PULSAR_TOKEN_MAP: LazyLock<Arc<HashMap<String, Token>>> = LazyLock::new(|| {
    parse_token_list(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/tokens_pulsar.json"
    )))
});

pub static MAINNET_TOKEN_MAP: LazyLock<Arc<HashMap<String, Token>>> = LazyLock::new(|| {
    parse_token_list(include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../app/public/tokens_mainnet.json"
    )))
});

pub fn get_token_map(chain_id: &str) -> Arc<HashMap<String, Token>> {
    match chain_id {
        "secretdev-1" => Arc::clone(&DEV_TOKEN_MAP),
        "pulsar-3" => Arc::clone(&PULSAR_TOKEN_MAP),
        "secret-4" => Arc::clone(&MAINNET_TOKEN_MAP),
        _ => panic!("invalid chain id!"),
    }
}

pub static TOKEN_MAP: LazyLock<Arc<HashMap<String, Token>>> =
    LazyLock::new(|| get_token_map(CHAIN_ID));

// For each token we know about at compile time, map from symbol to address
pub static SYMBOL_TO_ADDR: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    TOKEN_MAP
        .iter()
        .map(|(address, token)| (token.symbol.clone(), address.clone()))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_lists_the_stablecoin() {
        for chain_id in ["secretdev-1", "pulsar-3", "secret-4"] {
            let token_map = get_token_map(chain_id);
            assert!(
                token_map
                    .values()
                    .any(|token| token.symbol == USD_STABLECOIN),
                "{chain_id} has no {USD_STABLECOIN}"
            );
        }
    }

    #[test]
    fn symbols_resolve_to_addresses() {
        let address = SYMBOL_TO_ADDR.get(USD_STABLECOIN).unwrap();
        assert_eq!(TOKEN_MAP.get(address).unwrap().symbol, USD_STABLECOIN);
    }
}
