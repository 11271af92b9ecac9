use crate::error::Error;
use swap_sdk_core::{CurrencyAmount, Fraction, U256};

/// The exact amount in whole tokens, without trailing zeros, e.g. `1.5` or `2000`.
pub fn display_token_amount(amount: &CurrencyAmount) -> String {
    let exact = amount.to_exact();

    if exact.contains('.') {
        exact.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        exact
    }
}

/// Parses a user-entered decimal like `"1.5"` into the token's smallest unit. Digits past the
/// token's precision are truncated.
pub fn parse_token_amount(amount: impl AsRef<str>, decimals: impl Into<u32>) -> Result<u128, Error> {
    let amount = amount.as_ref().trim().replace(',', ".");
    let decimals = decimals.into();
    let factor = 10u128.pow(decimals);

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount.as_str(), ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(Error::InvalidAmount(amount.to_string()));
    }

    let whole_part: u128 = if whole.is_empty() { 0 } else { whole.parse()? };

    let fractional_part: u128 = {
        let mut decimal_str = fraction.to_string();

        // Pad or truncate the fractional part to match the precision
        if decimal_str.len() > decimals as usize {
            decimal_str.truncate(decimals as usize);
        } else {
            decimal_str.push_str(&"0".repeat(decimals as usize - decimal_str.len()));
        }

        if decimal_str.is_empty() {
            0
        } else {
            decimal_str.parse()?
        }
    };

    whole_part
        .checked_mul(factor)
        .and_then(|whole| whole.checked_add(fractional_part))
        .ok_or(Error::InvalidAmount(amount.to_string()))
}

/// Parses a decimal string into an exact fraction, e.g. `"0.25"` into `1/4`.
pub fn parse_decimal(value: impl AsRef<str>) -> Result<Fraction, Error> {
    let value = value.as_ref().trim();
    let decimals = value
        .split_once('.')
        .map(|(_, fraction)| fraction.len() as u32)
        .unwrap_or(0);

    let raw = parse_token_amount(value, decimals)?;

    Ok(Fraction::new(U256::from(raw), U256::from(10u128.pow(decimals)))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_sdk_core::Token;

    #[test]
    fn display_trims_trailing_zeros() {
        let usdc = Token::new("secret1usdc", 6, "USDC", "USD Coin");
        let display =
            |raw: u128| display_token_amount(&CurrencyAmount::from_raw_amount(usdc.clone(), raw));
        assert_eq!(display(1_500_000), "1.5");
        assert_eq!(display(2_000_000_000), "2000");
        assert_eq!(display(1), "0.000001");

        let whole = Token::new("secret1whole", 0, "WHOLE", "Whole");
        let amount = CurrencyAmount::from_raw_amount(whole, 4200u128);
        assert_eq!(display_token_amount(&amount), "4200");
    }

    #[test]
    fn display_keeps_amounts_beyond_u128() {
        let eth = Token::new("secret1eth", 18, "ETH", "Ether");
        let raw = U256::from(u128::MAX) * U256::new(1000);
        let amount = CurrencyAmount::from_raw_amount(eth, raw);
        assert_eq!(
            display_token_amount(&amount),
            "340282366920938463463374.607431768211455"
        );
    }

    #[test]
    fn parse_pads_and_truncates() {
        assert_eq!(parse_token_amount("1.5", 6u32), Ok(1_500_000));
        assert_eq!(parse_token_amount("1,5", 6u32), Ok(1_500_000));
        assert_eq!(parse_token_amount(".5", 6u32), Ok(500_000));
        assert_eq!(parse_token_amount("2000", 6u32), Ok(2_000_000_000));
        assert_eq!(parse_token_amount("0.1234567", 6u32), Ok(123_456));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_token_amount("", 6u32),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_token_amount("abc", 6u32),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_token_amount("1.2.3", 6u32),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn parses_decimals_exactly() {
        assert_eq!(parse_decimal("0.25"), Ok(Fraction::new(1u128, 4u128).unwrap()));
        assert_eq!(parse_decimal("2000"), Ok(Fraction::from_integer(2000u128)));
    }
}
