use std::num::ParseFloatError;

/// パイプラインのエラー
#[derive(Debug, thiserror::Error)]
pub enum SumError {
    #[error("{package} is not installed.")]
    MissingDependency { package: String },
    #[error("invalid number format: {input:?}")]
    InvalidNumberFormat {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
