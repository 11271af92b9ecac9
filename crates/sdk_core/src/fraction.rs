use crate::{constants::TEN, Error, Rounding};
use ethnum::U256;
use serde::{Deserialize, Serialize};

/// A non-negative rational number, always stored in lowest terms.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: U256,
    denominator: U256,
}

impl Fraction {
    pub fn new(numerator: impl Into<U256>, denominator: impl Into<U256>) -> Result<Self, Error> {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator == U256::ZERO {
            return Err(Error::ZeroDenominator);
        }

        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_integer(value: impl Into<U256>) -> Self {
        Self {
            numerator: value.into(),
            denominator: U256::ONE,
        }
    }

    // callers guarantee a non-zero denominator
    pub(crate) fn reduced(numerator: U256, denominator: U256) -> Self {
        let divisor = gcd(numerator, denominator);
        if divisor > U256::ONE {
            Self {
                numerator: numerator / divisor,
                denominator: denominator / divisor,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    pub fn numerator(&self) -> U256 {
        self.numerator
    }

    pub fn denominator(&self) -> U256 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == U256::ZERO
    }

    /// The integer part, rounded down.
    pub fn quotient(&self) -> U256 {
        self.numerator / self.denominator
    }

    pub fn remainder(&self) -> Self {
        Self::reduced(self.numerator % self.denominator, self.denominator)
    }

    pub fn invert(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self {
            numerator: self.denominator,
            denominator: self.numerator,
        })
    }

    pub fn multiply(&self, other: &Fraction) -> Self {
        // cross-reduce first to keep the intermediate products small
        let a = gcd(self.numerator, other.denominator).max(U256::ONE);
        let b = gcd(other.numerator, self.denominator).max(U256::ONE);

        Self::reduced(
            (self.numerator / a) * (other.numerator / b),
            (self.denominator / b) * (other.denominator / a),
        )
    }

    pub fn divide(&self, other: &Fraction) -> Result<Self, Error> {
        Ok(self.multiply(&other.invert()?))
    }

    /// Renders the value with at most `significant_digits` significant digits, in plain decimal
    /// notation. Trailing fractional zeros are dropped, so `2000/1` is `"2000"` and `1/2000` is
    /// `"0.0005"`.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        let significant_digits = significant_digits.max(1) as usize;

        if self.is_zero() {
            return "0".to_string();
        }

        let integer = self.quotient();
        let remainder = self.numerator % self.denominator;
        let integer_digits = integer.to_string();

        if integer > U256::ZERO && integer_digits.len() > significant_digits {
            // all the precision we keep is in the integer part
            let unit = TEN.pow((integer_digits.len() - significant_digits) as u32);
            let kept = integer / unit;
            let dropped = integer % unit;

            let up = match rounding {
                Rounding::RoundDown => false,
                Rounding::RoundHalfUp => dropped >= unit - dropped,
                Rounding::RoundUp => dropped > U256::ZERO || remainder > U256::ZERO,
            };
            let kept = if up { kept + U256::ONE } else { kept };

            return (kept * unit).to_string();
        }

        let mut counted = if integer > U256::ZERO {
            integer_digits.len()
        } else {
            0
        };
        let mut remainder = remainder;
        let mut fraction_digits = Vec::new();

        while counted < significant_digits {
            remainder *= TEN;
            let digit = remainder / self.denominator;
            remainder %= self.denominator;
            fraction_digits.push(digit.as_u128() as u8);
            if counted > 0 || digit > U256::ZERO {
                counted += 1;
            }
        }

        let (integer_digits, fraction_digits) = round_digits(
            integer_digits,
            fraction_digits,
            round_up(remainder, self.denominator, rounding),
        );

        join_digits(&integer_digits, fraction_digits.trim_end_matches('0'))
    }

    /// Renders the value with exactly `decimal_places` fractional digits.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let integer_digits = self.quotient().to_string();
        let mut remainder = self.numerator % self.denominator;
        let mut fraction_digits = Vec::with_capacity(decimal_places as usize);

        for _ in 0..decimal_places {
            remainder *= TEN;
            fraction_digits.push((remainder / self.denominator).as_u128() as u8);
            remainder %= self.denominator;
        }

        let (integer_digits, fraction_digits) = round_digits(
            integer_digits,
            fraction_digits,
            round_up(remainder, self.denominator, rounding),
        );

        join_digits(&integer_digits, &fraction_digits)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<U256> for Fraction {
    fn from(value: U256) -> Self {
        Self::from_integer(value)
    }
}

fn gcd(mut a: U256, mut b: U256) -> U256 {
    while b != U256::ZERO {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// `remainder / denominator` is what is left past the last kept digit
fn round_up(remainder: U256, denominator: U256, rounding: Rounding) -> bool {
    match rounding {
        Rounding::RoundDown => false,
        Rounding::RoundHalfUp => remainder >= denominator - remainder,
        Rounding::RoundUp => remainder > U256::ZERO,
    }
}

/// Adds one unit in the last place to `integer.fraction` when `up` is set, carrying as needed.
fn round_digits(integer: String, fraction: Vec<u8>, up: bool) -> (String, String) {
    let fraction_len = fraction.len();
    let mut digits: Vec<u8> = integer.bytes().map(|b| b - b'0').collect();
    digits.extend(fraction);

    let mut integer_len = digits.len() - fraction_len;
    if up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            integer_len += 1;
        }
    }

    let to_string = |digits: &[u8]| digits.iter().map(|d| (b'0' + d) as char).collect::<String>();
    (
        to_string(&digits[..integer_len]),
        to_string(&digits[integer_len..]),
    )
}

fn join_digits(integer: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}
