use crate::constants::TOKEN_MAP;
use std::{collections::HashMap, ops::Deref, sync::Arc};
use swap_sdk_core::Token;

// It's not a signal, and should rarely be updated.
#[derive(Clone, Debug)]
pub struct TokenMap(pub Arc<HashMap<String, Token>>);

impl TokenMap {
    pub fn new(token_map: Arc<HashMap<String, Token>>) -> Self {
        Self(token_map)
    }
}

impl Default for TokenMap {
    fn default() -> Self {
        Self(TOKEN_MAP.clone())
    }
}

impl Deref for TokenMap {
    type Target = HashMap<String, Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<HashMap<String, Token>> for TokenMap {
    fn as_ref(&self) -> &HashMap<String, Token> {
        &self.0
    }
}
