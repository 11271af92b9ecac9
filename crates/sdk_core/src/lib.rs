pub mod constants;
mod currency_amount;
mod error;
mod fraction;
mod price;
mod token;
mod trade;

pub use constants::{Rounding, TradeType};
pub use currency_amount::CurrencyAmount;
pub use error::Error;
pub use fraction::Fraction;
pub use price::Price;
pub use token::Token;
pub use trade::Trade;

pub use ethnum::U256;
