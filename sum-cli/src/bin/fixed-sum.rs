use std::io;
use std::process::ExitCode;

use clap::Parser;
use sum_cli::{PythonModuleProbe, SumError, run_fixed};

/// 3.0 + 3.0 を計算する (numpy が入っていることが前提)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    sum_cli::init_tracing();

    let outcome = run_fixed(&PythonModuleProbe::new(), &mut io::stdout().lock());
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ SumError::MissingDependency { .. }) => {
            // 依存不足の診断は stdout に出す
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
