use crate::{Error, Fraction, Rounding, Token};
use ethnum::U256;
use serde::{Deserialize, Serialize};

/// An amount of a specific token, kept as an exact ratio of the token's smallest unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyAmount {
    token: Token,
    fraction: Fraction,
}

impl CurrencyAmount {
    /// An amount given in the token's smallest unit, e.g. `1_000_000` for 1 USDC.
    pub fn from_raw_amount(token: Token, raw_amount: impl Into<U256>) -> Self {
        Self {
            token,
            fraction: Fraction::from_integer(raw_amount),
        }
    }

    pub fn from_fractional_amount(
        token: Token,
        numerator: impl Into<U256>,
        denominator: impl Into<U256>,
    ) -> Result<Self, Error> {
        Ok(Self {
            token,
            fraction: Fraction::new(numerator, denominator)?,
        })
    }

    pub(crate) fn with_fraction(token: Token, fraction: Fraction) -> Self {
        Self { token, fraction }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The raw ratio, in the token's smallest unit.
    pub fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Raw amount, rounded down to a whole smallest unit.
    pub fn quotient(&self) -> U256 {
        self.fraction.quotient()
    }

    pub fn is_zero(&self) -> bool {
        self.fraction.is_zero()
    }

    /// Number of smallest units in one whole token.
    pub fn decimal_scale(&self) -> U256 {
        self.token.decimal_scale()
    }

    pub fn multiply(&self, other: &Fraction) -> Self {
        Self::with_fraction(self.token.clone(), self.fraction.multiply(other))
    }

    pub fn divide(&self, other: &Fraction) -> Result<Self, Error> {
        Ok(Self::with_fraction(
            self.token.clone(),
            self.fraction.divide(other)?,
        ))
    }

    fn whole_units(&self) -> Fraction {
        self.fraction
            .multiply(&Fraction::reduced(U256::ONE, self.decimal_scale()))
    }

    /// The amount in whole tokens, rounded down to `significant_digits`.
    pub fn to_significant(&self, significant_digits: u32) -> String {
        self.whole_units()
            .to_significant(significant_digits, Rounding::RoundDown)
    }

    /// The amount in whole tokens, with every decimal the token supports.
    pub fn to_exact(&self) -> String {
        self.whole_units()
            .to_fixed(self.token.decimals as u32, Rounding::RoundDown)
    }
}

impl std::fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_significant(6), self.token)
    }
}
