//! Four-function arithmetic for the calculator session.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Operand text is not a real number.
    InvalidOperand(String),
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand(raw) => write!(f, "invalid operand `{raw}`"),
        }
    }
}

impl Error for CalcError {}

/// Parses one calculator operand, ignoring surrounding whitespace.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand(trimmed.to_string()))
}

/// Results of applying all four operations to one pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub lhs: f64,
    pub rhs: f64,
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// `None` when `rhs` is zero.
    pub quotient: Option<f64>,
}

impl Calculation {
    pub fn of(lhs: f64, rhs: f64) -> Self {
        Self {
            lhs,
            rhs,
            sum: lhs + rhs,
            difference: lhs - rhs,
            product: lhs * rhs,
            quotient: if rhs == 0.0 { None } else { Some(lhs / rhs) },
        }
    }
}
