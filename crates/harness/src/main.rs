//! cmpcheck: prove the branchless comparison primitives correct.
//!
//! Runs the registered checks (SIGNED, UNSIGNED, OR1) against an SMT solver
//! and prints one PASS/FAIL/UNKNOWN line per check. Exits nonzero unless
//! every check passes.

use std::process::ExitCode;

use cmpcheck_solver::{SmtSolver, SolverConfig, SolverKind};

use cmpcheck::report::print_results;
use cmpcheck::{default_checks, run_checks};

/// Operand width the primitives are validated at. The encoder itself is
/// width-parameterized; this matches the target's register width.
const DEFAULT_WIDTH: u32 = 32;

/// Per-query timeout. An undecided query is reported UNKNOWN, never PASS.
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

struct Options {
    kind: SolverKind,
    timeout_ms: u64,
    width: u32,
    sequential: bool,
}

fn usage() -> &'static str {
    "usage: cmpcheck [--solver z3|cvc5|yices] [--timeout-ms N] [--width N] [--sequential]"
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        kind: SolverKind::Z3,
        timeout_ms: DEFAULT_TIMEOUT_MS,
        width: DEFAULT_WIDTH,
        sequential: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--solver" => {
                let value = iter.next().ok_or("--solver needs a value")?;
                options.kind = value.parse()?;
            }
            "--timeout-ms" => {
                let value = iter.next().ok_or("--timeout-ms needs a value")?;
                options.timeout_ms = value
                    .parse()
                    .map_err(|_| format!("invalid timeout: {value}"))?;
            }
            "--width" => {
                let value = iter.next().ok_or("--width needs a value")?;
                options.width = value
                    .parse()
                    .map_err(|_| format!("invalid width: {value}"))?;
                if options.width == 0 || options.width > 64 {
                    return Err(format!("width must be 1..=64, got {}", options.width));
                }
            }
            "--sequential" => options.sequential = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    let config = match SolverConfig::auto_detect_for(options.kind) {
        Ok(config) => config.with_timeout(options.timeout_ms),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    let solver = SmtSolver::new(config);

    let checks = match default_checks(options.width) {
        Ok(checks) => checks,
        Err(err) => {
            eprintln!("encoding error: {err}");
            return ExitCode::from(2);
        }
    };

    let results = run_checks(&solver, &checks, !options.sequential);
    if print_results(&results) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.kind, SolverKind::Z3);
        assert_eq!(options.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert!(!options.sequential);
    }

    #[test]
    fn full_flag_set() {
        let options = parse_args(&args(&[
            "--solver",
            "cvc5",
            "--timeout-ms",
            "5000",
            "--width",
            "16",
            "--sequential",
        ]))
        .unwrap();
        assert_eq!(options.kind, SolverKind::Cvc5);
        assert_eq!(options.timeout_ms, 5000);
        assert_eq!(options.width, 16);
        assert!(options.sequential);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--solver"])).is_err());
        assert!(parse_args(&args(&["--solver", "boolector"])).is_err());
        assert!(parse_args(&args(&["--width", "0"])).is_err());
        assert!(parse_args(&args(&["--width", "128"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}
