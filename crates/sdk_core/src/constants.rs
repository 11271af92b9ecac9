use ethnum::U256;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    RoundDown,
    RoundHalfUp,
    RoundUp,
}

/// Number of basis points in 100%.
pub const BASIS_POINTS: u16 = 10_000;

pub(crate) const TEN: U256 = U256::new(10);
