//! Check execution: solve each query and classify the verdict.
//!
//! Checks are independent (each owns its variables and each solve is a fresh
//! solver process), so they run in parallel across a rayon pool by default;
//! results come back in registration order either way, and each check's
//! outcome is produced whole before anything is printed.

use cmpcheck_smtlib::{Sort, Value, eval};
use cmpcheck_solver::{Model, SmtSolver, Verdict};
use rayon::prelude::*;

use crate::checks::Check;

/// Classified outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `unsat`: proved for every input.
    Pass,
    /// `sat`: a genuine counterexample, already validated by substitution.
    Fail(Model),
    /// `unknown`: the solver gave up. Distinct from both pass and fail.
    Inconclusive(String),
    /// The solve or the counterexample validation itself broke down.
    Error(String),
}

/// One check's name and outcome.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub outcome: Outcome,
}

/// Run every check and collect results in registration order.
pub fn run_checks(solver: &SmtSolver, checks: &[Check], parallel: bool) -> Vec<CheckResult> {
    let run_one = |check: &Check| CheckResult {
        name: check.name.clone(),
        outcome: solve_one(solver, check),
    };

    if parallel {
        checks.par_iter().map(run_one).collect()
    } else {
        checks.iter().map(run_one).collect()
    }
}

fn solve_one(solver: &SmtSolver, check: &Check) -> Outcome {
    match solver.check(&check.script) {
        Err(err) => Outcome::Error(err.to_string()),
        Ok(Verdict::Unsat) => Outcome::Pass,
        Ok(Verdict::Unknown(reason)) => Outcome::Inconclusive(reason),
        Ok(Verdict::Sat(None)) => {
            Outcome::Error("solver reported sat without a model".to_string())
        }
        Ok(Verdict::Sat(Some(model))) => match validate_counterexample(check, &model) {
            Ok(()) => Outcome::Fail(model),
            Err(msg) => Outcome::Error(msg),
        },
    }
}

/// Substitute the model back into the asserted (negated) formula and require
/// it to evaluate to true. Guards against backend or parse defects handing
/// back a bogus witness.
fn validate_counterexample(check: &Check, model: &Model) -> Result<(), String> {
    let mut env = cmpcheck_smtlib::eval::Env::new();
    for (name, sort) in check.script.declarations() {
        let Sort::BitVec(width) = *sort else {
            return Err(format!("declared constant {name} is not a bit-vector"));
        };
        let bits = model
            .get_bits(name)
            .ok_or_else(|| format!("model has no bit-vector value for {name}"))?;
        env.insert(name.to_string(), Value::bits(bits, width));
    }

    let assertion = check
        .script
        .sole_assertion()
        .ok_or_else(|| "query does not carry exactly one assertion".to_string())?;

    match eval(assertion, &env) {
        Ok(Value::Bool(true)) => Ok(()),
        Ok(other) => Err(format!(
            "counterexample failed substitution check: formula evaluated to {other:?}"
        )),
        Err(err) => Err(format!("counterexample substitution failed: {err}")),
    }
}
