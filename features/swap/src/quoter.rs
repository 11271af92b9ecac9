use std::{collections::HashMap, sync::LazyLock};
use swap_core::{utils::parse_decimal, Error};
use swap_sdk_core::{CurrencyAmount, Fraction, Price, Token, Trade, TradeType};
use tracing::debug;

// USD value of one whole token, keyed by symbol
pub static REFERENCE_PRICES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let json = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../app/public/reference_prices.json"
    ));
    parse_reference_prices(json).expect("Failed to deserialize reference prices")
});

pub fn parse_reference_prices(json: &str) -> Result<HashMap<String, String>, Error> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub trade: Trade,
    /// USD value of the trade's output, in the stablecoin.
    pub output_usdc: Option<CurrencyAmount>,
}

/// Quotes an exact-input swap at the reference prices, with no fees or price impact.
///
/// The USDC value is only produced when `usd_token` is given and has a reference price.
pub fn quote_exact_input(
    token_in: &Token,
    token_out: &Token,
    amount_in: u128,
    usd_token: Option<&Token>,
    prices: &HashMap<String, String>,
) -> Result<Quote, Error> {
    let amount_in = CurrencyAmount::from_raw_amount(token_in.clone(), amount_in);

    // rounded down to the smallest unit of token_out
    let amount_out = reference_rate(token_in, token_out, prices)?.quote(&amount_in)?;
    let amount_out = CurrencyAmount::from_raw_amount(token_out.clone(), amount_out.quotient());

    let output_usdc = usd_token
        .map(|usd_token| -> Result<CurrencyAmount, Error> {
            Ok(reference_rate(token_out, usd_token, prices)?.quote(&amount_out)?)
        })
        .transpose()?;

    let trade = Trade::new(amount_in, amount_out, TradeType::ExactInput)?;

    debug!("quoted {:?} -> {:?}", trade.input_amount(), trade.output_amount());

    Ok(Quote { trade, output_usdc })
}

fn reference_price(token: &Token, prices: &HashMap<String, String>) -> Result<Fraction, Error> {
    prices
        .get(&token.symbol)
        .ok_or_else(|| Error::generic(format!("No reference price for {}", token.symbol)))
        .and_then(|price| parse_decimal(price))
}

/// How many `quote` tokens one `base` token is worth at the reference prices.
fn reference_rate(
    base: &Token,
    quote: &Token,
    prices: &HashMap<String, String>,
) -> Result<Price, Error> {
    let rate = reference_price(base, prices)?.divide(&reference_price(quote, prices)?)?;

    Ok(Price::new(
        base.clone(),
        quote.clone(),
        rate.denominator() * base.decimal_scale(),
        rate.numerator() * quote.decimal_scale(),
    )?)
}
