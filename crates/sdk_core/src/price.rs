use crate::{constants::TEN, CurrencyAmount, Error, Fraction, Rounding, Token};
use ethnum::U256;
use serde::{Deserialize, Serialize};

/// How many `quote` tokens one `base` token is worth.
///
/// The raw ratio is kept in smallest units (`quote_raw / base_raw`); `scalar` converts it to whole
/// units, so tokens with different decimals compare correctly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Fraction,
    scalar: Fraction,
}

impl Price {
    /// `denominator` is an amount of `base`, `numerator` the matching amount of `quote`, both in
    /// smallest units.
    pub fn new(
        base: Token,
        quote: Token,
        denominator: impl Into<U256>,
        numerator: impl Into<U256>,
    ) -> Result<Self, Error> {
        let raw = Fraction::new(numerator, denominator)?;
        if raw.is_zero() {
            return Err(Error::ZeroAmount);
        }

        let scalar = Self::scalar(&base, &quote);

        Ok(Self {
            base,
            quote,
            raw,
            scalar,
        })
    }

    pub fn from_amounts(base: &CurrencyAmount, quote: &CurrencyAmount) -> Result<Self, Error> {
        let raw = quote.as_fraction().divide(base.as_fraction())?;
        if raw.is_zero() {
            return Err(Error::ZeroAmount);
        }

        Ok(Self {
            base: base.token().clone(),
            quote: quote.token().clone(),
            raw,
            scalar: Self::scalar(base.token(), quote.token()),
        })
    }

    fn scalar(base: &Token, quote: &Token) -> Fraction {
        Fraction::reduced(
            TEN.pow(base.decimals as u32),
            TEN.pow(quote.decimals as u32),
        )
    }

    pub fn base_currency(&self) -> &Token {
        &self.base
    }

    pub fn quote_currency(&self) -> &Token {
        &self.quote
    }

    pub fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// The same rate, seen from the other side.
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            // non-zero by construction
            raw: Fraction::reduced(self.raw.denominator(), self.raw.numerator()),
            scalar: Self::scalar(&self.quote, &self.base),
        }
    }

    /// The rate in whole units.
    pub fn adjusted_for_decimals(&self) -> Fraction {
        self.raw.multiply(&self.scalar)
    }

    pub fn to_significant(&self, significant_digits: u32) -> String {
        self.adjusted_for_decimals()
            .to_significant(significant_digits, Rounding::RoundHalfUp)
    }

    pub fn to_fixed(&self, decimal_places: u32) -> String {
        self.adjusted_for_decimals()
            .to_fixed(decimal_places, Rounding::RoundHalfUp)
    }

    /// Converts an amount of the base token into the quote token at this rate.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount, Error> {
        if amount.token() != &self.base {
            return Err(Error::TokenMismatch {
                expected: self.base.symbol.clone(),
                actual: amount.token().symbol.clone(),
            });
        }

        Ok(CurrencyAmount::with_fraction(
            self.quote.clone(),
            self.raw.multiply(amount.as_fraction()),
        ))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "1 {} = {} {}",
            self.base,
            self.to_significant(6),
            self.quote
        )
    }
}
