//! Checked integer arithmetic for the grammar levels.

use calc_lexer::TokenType;

use super::error::Fault;

pub(crate) fn add(lhs: i64, rhs: i64) -> Result<i64, Fault> {
    lhs.checked_add(rhs).ok_or(Fault::Overflow)
}

pub(crate) fn subtract(lhs: i64, rhs: i64) -> Result<i64, Fault> {
    lhs.checked_sub(rhs).ok_or(Fault::Overflow)
}

pub(crate) fn multiply(lhs: i64, rhs: i64) -> Result<i64, Fault> {
    lhs.checked_mul(rhs).ok_or(Fault::Overflow)
}

/// Integer division, truncating toward zero.
pub(crate) fn divide(lhs: i64, rhs: i64) -> Result<i64, Fault> {
    if rhs == 0 {
        return Err(Fault::DivisionByZero);
    }
    // i64::MIN / -1
    lhs.checked_div(rhs).ok_or(Fault::Overflow)
}

/// Integer exponentiation.
///
/// A negative exponent gives the real power truncated toward zero, so only
/// bases of magnitude one survive; zero to a negative power is a division by
/// zero. `0 ^ 0` is 1.
pub(crate) fn power(base: i64, exponent: i64) -> Result<i64, Fault> {
    let odd = exponent % 2 != 0;

    if exponent < 0 {
        return match base {
            0 => Err(Fault::DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Ok(0),
        };
    }

    match base {
        0 => Ok(if exponent == 0 { 1 } else { 0 }),
        1 => Ok(1),
        -1 => Ok(if odd { -1 } else { 1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or(Fault::Overflow),
    }
}

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Comparison {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    /// The comparison `token_type` denotes, if any
    pub(crate) fn from_token(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Less => Some(Comparison::Less),
            TokenType::Greater => Some(Comparison::Greater),
            TokenType::LessEqual => Some(Comparison::LessEqual),
            TokenType::GreaterEqual => Some(Comparison::GreaterEqual),
            TokenType::EqualEqual => Some(Comparison::Equal),
            TokenType::NotEqual => Some(Comparison::NotEqual),
            _ => None,
        }
    }

    /// Yields 1 when the comparison holds and 0 otherwise.
    pub(crate) fn apply(self, lhs: i64, rhs: i64) -> i64 {
        let holds = match self {
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::LessEqual => lhs <= rhs,
            Comparison::GreaterEqual => lhs >= rhs,
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
        };
        i64::from(holds)
    }
}
