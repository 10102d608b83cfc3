use std::fmt;
use std::io::Write;

use crate::error::SumError;
use crate::operand::Operand;

/// 計算結果。呼び出し側へはこの値で返す
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sum {
    pub num1: Operand,
    pub num2: Operand,
    pub result: f64,
}

impl Sum {
    pub fn new(num1: Operand, num2: Operand) -> Self {
        Self {
            num1,
            num2,
            result: crate::operand::add(num1.value(), num2.value()),
        }
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The sum of {} and {} is {}.",
            self.num1,
            self.num2,
            Operand(self.result)
        )
    }
}

pub fn report(out: &mut impl Write, sum: &Sum) -> Result<(), SumError> {
    writeln!(out, "{}", sum)?;
    out.flush()?;
    Ok(())
}
