//! Number formatting for token amounts and prices.
//!
//! Each [`NumberType`] is a list of rules, checked in order. The first rule whose bound matches
//! the value picks the formatter: either a fixed string like `<0.001`, or a style describing
//! how many digits to show.

use swap_sdk_core::CurrencyAmount;

/// Shown in place of a value that is missing or not a number.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Token amounts and rates shown in the context of a transaction.
    TokenTx,
    /// The fiat value of one unit of a token.
    FiatTokenPrice,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    min_fraction: usize,
    max_fraction: usize,
    // (min, max); takes precedence over the fraction digits when set
    significant: Option<(usize, usize)>,
    grouping: bool,
    currency: bool,
    compact: bool,
}

impl Style {
    const fn decimals(min_fraction: usize, max_fraction: usize) -> Self {
        Self {
            min_fraction,
            max_fraction,
            significant: None,
            grouping: true,
            currency: false,
            compact: false,
        }
    }

    const fn significant(mut self, min: usize, max: usize) -> Self {
        self.significant = Some((min, max));
        self
    }

    const fn no_grouping(mut self) -> Self {
        self.grouping = false;
        self
    }

    const fn usd(mut self) -> Self {
        self.currency = true;
        self
    }

    const fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Formatter {
    Text(&'static str),
    Style(Style),
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Exact(f64, Formatter),
    Below(f64, Formatter),
}

const TWO_DECIMALS: Style = Style::decimals(2, 2);
const FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN: Style = Style::decimals(2, 5);
const SIX_SIG_FIGS_TWO_DECIMALS_NO_COMMAS: Style =
    Style::decimals(2, 2).significant(3, 6).no_grouping();
const THREE_SIG_FIGS_USD: Style = Style::decimals(0, 0).significant(3, 3).usd();
const TWO_DECIMALS_USD: Style = Style::decimals(2, 2).usd();
const SHORTHAND_USD_TWO_DECIMALS: Style = Style::decimals(2, 2).usd().compact();

const TOKEN_TX: &[Rule] = &[
    Rule::Exact(0.0, Formatter::Text("0")),
    Rule::Below(0.00001, Formatter::Text("<0.00001")),
    Rule::Below(1.0, Formatter::Style(FIVE_DECIMALS_MAX_TWO_DECIMALS_MIN)),
    Rule::Below(10_000.0, Formatter::Style(SIX_SIG_FIGS_TWO_DECIMALS_NO_COMMAS)),
    Rule::Below(f64::INFINITY, Formatter::Style(TWO_DECIMALS)),
];

const FIAT_TOKEN_PRICE: &[Rule] = &[
    Rule::Exact(0.0, Formatter::Text("$0.00")),
    Rule::Below(0.00000001, Formatter::Text("<$0.00000001")),
    Rule::Below(1.0, Formatter::Style(THREE_SIG_FIGS_USD)),
    Rule::Below(1e6, Formatter::Style(TWO_DECIMALS_USD)),
    Rule::Below(1e16, Formatter::Style(SHORTHAND_USD_TWO_DECIMALS)),
    Rule::Below(f64::INFINITY, Formatter::Text(">$999T")),
];

impl NumberType {
    fn rules(self) -> &'static [Rule] {
        match self {
            NumberType::TokenTx => TOKEN_TX,
            NumberType::FiatTokenPrice => FIAT_TOKEN_PRICE,
        }
    }

    fn formatter_for(self, value: f64) -> Option<Formatter> {
        self.rules().iter().find_map(|rule| match *rule {
            Rule::Exact(exact, formatter) if value == exact => Some(formatter),
            Rule::Below(bound, formatter) if value < bound => Some(formatter),
            _ => None,
        })
    }
}

pub fn format_number(input: Option<f64>, number_type: NumberType, placeholder: &str) -> String {
    let Some(value) = input.filter(|value| value.is_finite()) else {
        return placeholder.to_string();
    };

    match number_type.formatter_for(value) {
        Some(Formatter::Text(text)) => text.to_string(),
        Some(Formatter::Style(style)) => apply_style(&style, value),
        None => placeholder.to_string(),
    }
}

pub fn format_currency_amount(amount: Option<&CurrencyAmount>, number_type: NumberType) -> String {
    let value = amount.and_then(|amount| amount.to_significant(15).parse::<f64>().ok());
    format_number(value, number_type, PLACEHOLDER)
}

/// Formats a price given as a decimal string. Missing or unparseable input renders as `-`.
pub fn format_price(price: Option<&str>, number_type: NumberType) -> String {
    let value = price.and_then(|price| price.trim().parse::<f64>().ok());
    format_number(value, number_type, PLACEHOLDER)
}

fn apply_style(style: &Style, value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let mut value = value.abs();

    let mut suffix = "";
    if style.compact {
        for (threshold, unit) in [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")] {
            if value >= threshold {
                value /= threshold;
                suffix = unit;
                break;
            }
        }
    }

    let digits = match style.significant {
        Some((min, max)) => to_significant_digits(value, min, max),
        None => to_fraction_digits(value, style.min_fraction, style.max_fraction),
    };
    let digits = if style.grouping {
        group_thousands(&digits)
    } else {
        digits
    };
    let currency = if style.currency { "$" } else { "" };

    format!("{sign}{currency}{digits}{suffix}")
}

fn to_fraction_digits(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let formatted = format!("{value:.max_fraction$}");
    trim_fraction(formatted, |_, fraction_len| fraction_len > min_fraction)
}

fn to_significant_digits(value: f64, min: usize, max: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", min.saturating_sub(1), 0.0);
    }

    let exponent = value.log10().floor() as i32;
    let decimals = max as i32 - 1 - exponent;

    let formatted = if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let unit = 10f64.powi(-decimals);
        format!("{:.0}", (value / unit).round() * unit)
    };

    trim_fraction(formatted, |significant, _| significant > min)
}

/// Drops trailing fractional zeros while `keep_trimming(significant_digits, fraction_len)` holds.
fn trim_fraction(mut formatted: String, keep_trimming: impl Fn(usize, usize) -> bool) -> String {
    let Some(point) = formatted.find('.') else {
        return formatted;
    };

    while formatted.ends_with('0') {
        let fraction_len = formatted.len() - point - 1;
        if !keep_trimming(count_significant(&formatted), fraction_len) {
            break;
        }
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }

    formatted
}

fn count_significant(formatted: &str) -> usize {
    formatted
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count()
}

fn group_thousands(formatted: &str) -> String {
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}
