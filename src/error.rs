use thiserror::Error;

/// Every failure a [`LinkedNumber`](crate::LinkedNumber) operation can report.
///
/// Operations fail before touching the chain, so a returned error never
/// leaves a number half mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkedNumberError {
    #[error("no digits given")]
    EmptyInput,
    #[error("invalid digit symbol {0:?}")]
    InvalidDigit(char),
    #[error("digit value {0} has no symbol")]
    InvalidDigitValue(u32),
    #[error("base {0} is outside 2..=36")]
    InvalidBase(u32),
    #[error("invalid position {position} for a number of {size} digits")]
    InvalidPosition { position: usize, size: usize },
    #[error("cannot convert invalid number")]
    InvalidNumber,
    #[error("negative input {0} is not supported")]
    NegativeInput(i64),
}

pub type Result<T> = std::result::Result<T, LinkedNumberError>;
