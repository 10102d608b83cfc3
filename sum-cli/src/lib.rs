//! 2つの数値を加算して結果を一行で報告する。
//!
//! Dependency Check → 入力 → 加算 → 報告 の一方通行パイプライン。
//! バイナリは `sum-cli` (フラグ指定) と `fixed-sum` (固定値 3.0 + 3.0) の2つ。

pub mod dependency;
pub mod error;
pub mod operand;
pub mod pipeline;
pub mod report;

pub use dependency::{DependencyProbe, PythonModuleProbe, REQUIRED_PACKAGE};
pub use error::SumError;
pub use operand::{Operand, add};
pub use pipeline::{run_fixed, run_operands, run_with_inputs};
pub use report::{Sum, report};

/// stderr 向けの tracing subscriber を設定する。stdout は報告行専用。
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
