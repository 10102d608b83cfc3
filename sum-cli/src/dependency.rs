use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::SumError;

/// fixed-sum が起動時に要求するパッケージ
pub const REQUIRED_PACKAGE: &str = "numpy";

// find_spec は import せずに存在だけを見る
const FIND_SPEC: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

pub trait DependencyProbe {
    fn is_installed(&self, package: &str) -> bool;
}

/// ホストの Python インタプリタにモジュールの有無を問い合わせる
#[derive(Debug, Clone)]
pub struct PythonModuleProbe {
    interpreter: OsString,
}

impl PythonModuleProbe {
    pub fn new() -> Self {
        Self::with_interpreter("python3")
    }

    pub fn with_interpreter(interpreter: impl Into<OsString>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for PythonModuleProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyProbe for PythonModuleProbe {
    fn is_installed(&self, package: &str) -> bool {
        let status = Command::new(&self.interpreter)
            .args(["-c", FIND_SPEC, package])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => {
                debug!(package, %status, "probe finished");
                status.success()
            }
            Err(err) => {
                // インタプリタ自体が無い場合も未インストール扱い
                debug!(package, interpreter = ?self.interpreter, %err, "failed to run probe");
                false
            }
        }
    }
}

/// `package` が無ければ `MissingDependency` を返す。
pub fn require(probe: &impl DependencyProbe, package: &str) -> Result<(), SumError> {
    if probe.is_installed(package) {
        Ok(())
    } else {
        warn!(package, "required dependency is missing");
        Err(SumError::MissingDependency {
            package: package.to_string(),
        })
    }
}
