use crate::{constants::BASIS_POINTS, CurrencyAmount, Error, Fraction, Price, TradeType};
use ethnum::U256;
use serde::{Deserialize, Serialize};

/// A quoted swap of `input_amount` for `output_amount`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    trade_type: TradeType,
    execution_price: Price,
}

impl Trade {
    pub fn new(
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
        trade_type: TradeType,
    ) -> Result<Self, Error> {
        if input_amount.token() == output_amount.token() {
            return Err(Error::IdenticalTokens(input_amount.token().symbol.clone()));
        }
        if input_amount.is_zero() || output_amount.is_zero() {
            return Err(Error::ZeroAmount);
        }

        let execution_price = Price::from_amounts(&input_amount, &output_amount)?;

        Ok(Self {
            input_amount,
            output_amount,
            trade_type,
            execution_price,
        })
    }

    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    /// Output per unit of input, as actually executed by this trade.
    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// The least the trade may return given `slippage` in basis points.
    ///
    /// For exact-output trades the output is fixed, so it is returned as is.
    pub fn minimum_amount_out(&self, slippage: u16) -> CurrencyAmount {
        match self.trade_type {
            TradeType::ExactOutput => self.output_amount.clone(),
            TradeType::ExactInput => {
                let slippage = slippage.min(BASIS_POINTS);
                let kept = Fraction::reduced(
                    U256::from(BASIS_POINTS - slippage),
                    U256::from(BASIS_POINTS),
                );
                let amount = self.output_amount.multiply(&kept);
                CurrencyAmount::from_raw_amount(amount.token().clone(), amount.quotient())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    fn eth() -> Token {
        Token::new("secret1eth", 18, "ETH", "Ether")
    }

    fn usdc() -> Token {
        Token::new("secret1usdc", 6, "USDC", "USD Coin")
    }

    fn eth_for_usdc() -> Trade {
        Trade::new(
            CurrencyAmount::from_raw_amount(eth(), 10u128.pow(18)),
            CurrencyAmount::from_raw_amount(usdc(), 2_000_000_000u128),
            TradeType::ExactInput,
        )
        .unwrap()
    }

    #[test]
    fn execution_price_is_output_per_input() {
        let trade = eth_for_usdc();
        let price = trade.execution_price();
        assert_eq!(price.base_currency(), &eth());
        assert_eq!(price.quote_currency(), &usdc());
        assert_eq!(price.to_significant(6), "2000");
    }

    #[test]
    fn rejects_malformed_trades() {
        let same = Trade::new(
            CurrencyAmount::from_raw_amount(usdc(), 1u128),
            CurrencyAmount::from_raw_amount(usdc(), 1u128),
            TradeType::ExactInput,
        );
        assert_eq!(same, Err(Error::IdenticalTokens("USDC".to_string())));

        let empty = Trade::new(
            CurrencyAmount::from_raw_amount(eth(), 0u128),
            CurrencyAmount::from_raw_amount(usdc(), 1u128),
            TradeType::ExactInput,
        );
        assert_eq!(empty, Err(Error::ZeroAmount));
    }

    #[test]
    fn minimum_amount_out_applies_slippage() {
        let trade = eth_for_usdc();
        // 0.5%
        assert_eq!(
            trade.minimum_amount_out(50).quotient(),
            U256::new(1_990_000_000)
        );
        assert_eq!(trade.minimum_amount_out(0), *trade.output_amount());

        let exact_out = Trade::new(
            trade.input_amount().clone(),
            trade.output_amount().clone(),
            TradeType::ExactOutput,
        )
        .unwrap();
        assert_eq!(exact_out.minimum_amount_out(50), *trade.output_amount());
    }
}
