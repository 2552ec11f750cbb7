//! Per-check result lines.
//!
//! One line per check: the name left-padded to a fixed column, a status
//! tag, and the counterexample inlined on failure:
//!
//! ```text
//! SIGNED    : PASS
//! UNSIGNED  : FAIL - lhs = 0x80000000, rhs = 0x00000001
//! ```

use colored::Colorize;

use cmpcheck_solver::Model;

use crate::run::{CheckResult, Outcome};

/// Minimum name column width; longer names widen the column for the whole
/// report.
const NAME_COLUMN: usize = 10;

/// Render a model as `name = 0x…` pairs in model order.
pub fn render_model(model: &Model) -> String {
    model
        .iter()
        .map(|(name, raw)| {
            let value = if let Some(hex) = raw.strip_prefix("#x") {
                format!("0x{hex}")
            } else if let Some(bits) = model.get_bits(name) {
                format!("{bits:#x}")
            } else {
                raw.to_string()
            };
            format!("{name} = {value}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn name_column(results: &[CheckResult]) -> usize {
    results
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max(NAME_COLUMN)
}

/// The uncolored body of one result line.
pub fn render_line(result: &CheckResult, column: usize) -> String {
    let name = &result.name;
    match &result.outcome {
        Outcome::Pass => format!("{name:<column$}: PASS"),
        Outcome::Fail(model) => {
            format!("{name:<column$}: FAIL - {}", render_model(model))
        }
        Outcome::Inconclusive(reason) => format!("{name:<column$}: UNKNOWN - {reason}"),
        Outcome::Error(msg) => format!("{name:<column$}: ERROR - {msg}"),
    }
}

/// Print every result line, color-coded by status. Returns whether every
/// check passed, for the process exit status.
pub fn print_results(results: &[CheckResult]) -> bool {
    let column = name_column(results);
    let mut all_passed = true;

    for result in results {
        let line = render_line(result, column);
        match &result.outcome {
            Outcome::Pass => println!("{}", line.green()),
            Outcome::Fail(_) => {
                all_passed = false;
                println!("{}", line.red().bold());
            }
            Outcome::Inconclusive(_) => {
                all_passed = false;
                println!("{}", line.yellow());
            }
            Outcome::Error(_) => {
                all_passed = false;
                println!("{}", line.red());
            }
        }
    }

    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: Outcome) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn pass_line_is_padded() {
        let line = render_line(&result("SIGNED", Outcome::Pass), 10);
        assert_eq!(line, "SIGNED    : PASS");
    }

    #[test]
    fn fail_line_inlines_the_model() {
        let model = Model::new(vec![
            ("lhs".to_string(), "#x80000000".to_string()),
            ("rhs".to_string(), "#x00000001".to_string()),
        ]);
        let line = render_line(&result("SIGNED", Outcome::Fail(model)), 10);
        assert_eq!(
            line,
            "SIGNED    : FAIL - lhs = 0x80000000, rhs = 0x00000001"
        );
    }

    #[test]
    fn unknown_line_has_reason() {
        let line = render_line(&result("OR1", Outcome::Inconclusive("timeout".to_string())), 10);
        assert_eq!(line, "OR1       : UNKNOWN - timeout");
    }

    #[test]
    fn long_names_widen_the_column() {
        let results = vec![
            result("SIGNED", Outcome::Pass),
            result("SIGNED-SWAPPED", Outcome::Pass),
        ];
        assert_eq!(name_column(&results), 14);
    }

    #[test]
    fn render_model_decodes_non_hex_literals() {
        let model = Model::new(vec![("x".to_string(), "(_ bv5 32)".to_string())]);
        assert_eq!(render_model(&model), "x = 0x5");
    }

    #[test]
    fn print_results_reports_overall_status() {
        let passing = vec![result("A", Outcome::Pass)];
        assert!(print_results(&passing));

        let failing = vec![
            result("A", Outcome::Pass),
            result("B", Outcome::Inconclusive("timeout".to_string())),
        ];
        assert!(!print_results(&failing));
    }
}
