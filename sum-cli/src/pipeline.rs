use std::io::Write;

use tracing::{debug, info};

use crate::dependency::{self, DependencyProbe, REQUIRED_PACKAGE};
use crate::error::SumError;
use crate::operand::Operand;
use crate::report::{self, Sum};

/// 固定値 3.0 + 3.0。依存が無ければ加算せずに `MissingDependency`。
pub fn run_fixed(probe: &impl DependencyProbe, out: &mut impl Write) -> Result<Sum, SumError> {
    dependency::require(probe, REQUIRED_PACKAGE)?;
    run_operands(Operand::FIXED, Operand::FIXED, out)
}

/// 文字列2つを数値に変換して加算する。変換に失敗したら何も出力しない。
pub fn run_with_inputs(num1: &str, num2: &str, out: &mut impl Write) -> Result<Sum, SumError> {
    let num1: Operand = num1.parse()?;
    let num2: Operand = num2.parse()?;
    debug!(%num1, %num2, "parsed operands");
    run_operands(num1, num2, out)
}

/// 変換済みの入力を加算して報告する。
pub fn run_operands(num1: Operand, num2: Operand, out: &mut impl Write) -> Result<Sum, SumError> {
    let sum = Sum::new(num1, num2);
    info!(result = sum.result, "computed sum");
    report::report(out, &sum)?;
    Ok(sum)
}
