#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Fraction denominator cannot be zero")]
    ZeroDenominator,

    #[error("Amount cannot be zero")]
    ZeroAmount,

    #[error("Input and output tokens are identical: {0}")]
    IdenticalTokens(String),

    #[error("Token mismatch: expected {expected}, got {actual}")]
    TokenMismatch { expected: String, actual: String },
}
