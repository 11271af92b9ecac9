pub mod constants;
mod error;
pub mod format;
pub mod state;
pub mod utils;

pub use constants::{CHAIN_ID, SYMBOL_TO_ADDR, TOKEN_MAP, USD_STABLECOIN};
pub use error::Error;
pub use state::TokenMap;
