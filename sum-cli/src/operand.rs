use std::fmt;
use std::str::FromStr;

use crate::error::SumError;

/// 加算の入力値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(pub f64);

impl Operand {
    /// 固定値版の入力
    pub const FIXED: Operand = Operand(3.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Operand {
    type Err = SumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Operand)
            .map_err(|source| SumError::InvalidNumberFormat {
                input: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug は常に小数部か指数を出す (3 ではなく 3.0)
        write!(f, "{:?}", self.0)
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}
