use std::io;
use std::process::ExitCode;

use clap::Parser;
use sum_cli::{Operand, SumError, run_operands};

/// 2つの数値を加算するシンプルなプログラム
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 1つ目の数値
    #[arg(long, allow_negative_numbers = true)]
    num1: String,

    /// 2つ目の数値
    #[arg(long, allow_negative_numbers = true)]
    num2: String,
}

fn parse_flag(flag: &str, text: &str) -> Result<Operand, ExitCode> {
    text.parse().map_err(|err| {
        match err {
            SumError::InvalidNumberFormat { input, source } => {
                eprintln!("error: invalid number format for '{flag}': {input:?} ({source})");
            }
            other => eprintln!("error: {other}"),
        }
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    // 必須フラグが欠けていれば clap が usage を出して終了する
    let args = Args::parse();
    sum_cli::init_tracing();

    let num1 = match parse_flag("--num1", &args.num1) {
        Ok(num1) => num1,
        Err(code) => return code,
    };
    let num2 = match parse_flag("--num2", &args.num2) {
        Ok(num2) => num2,
        Err(code) => return code,
    };

    let outcome = run_operands(num1, num2, &mut io::stdout().lock());
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
