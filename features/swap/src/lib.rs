mod price;
mod quoter;
mod swap;
mod swap_details;

pub use price::{trade_exchange_rate, use_trade_exchange_rate, Base, Price};
pub use quoter::{parse_reference_prices, quote_exact_input, Quote, REFERENCE_PRICES};
pub use swap::{Swap, DEFAULT_SLIPPAGE};
pub use swap_details::SwapDetails;
