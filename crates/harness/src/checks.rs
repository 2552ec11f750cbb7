//! The registry of named verification checks.
//!
//! Each check pairs a human-readable name with the counterexample-search
//! script for one candidate/contract pair. Encoding happens here, eagerly,
//! so a width mismatch aborts before anything reaches a solver.

use cmpcheck_smtlib::{Bv, Script, WidthMismatch};

use crate::candidate;
use crate::contract::{Signedness, comparison_contract};
use crate::query::counterexample_query;

/// One named verification check, ready to solve.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub script: Script,
}

/// SIGNED: the signed-compare candidate against the signed contract.
pub fn signed_check(width: u32) -> Result<Check, WidthMismatch> {
    let lhs = Bv::var("lhs", width);
    let rhs = Bv::var("rhs", width);
    let result = candidate::signed_cmp(&lhs, &rhs)?;
    let property = comparison_contract(Signedness::Signed, &lhs, &rhs, &result)?;
    Ok(Check {
        name: "SIGNED".to_string(),
        script: counterexample_query(&[("lhs", width), ("rhs", width)], property),
    })
}

/// UNSIGNED: the unsigned-compare candidate against the unsigned contract.
pub fn unsigned_check(width: u32) -> Result<Check, WidthMismatch> {
    let lhs = Bv::var("lhs", width);
    let rhs = Bv::var("rhs", width);
    let result = candidate::unsigned_cmp(&lhs, &rhs)?;
    let property = comparison_contract(Signedness::Unsigned, &lhs, &rhs, &result)?;
    Ok(Check {
        name: "UNSIGNED".to_string(),
        script: counterexample_query(&[("lhs", width), ("rhs", width)], property),
    })
}

/// OR1: the branchless OR-with-1 helper against the direct `x | 1`
/// reference. A plain identity, not a relational contract.
pub fn or1_check(width: u32) -> Result<Check, WidthMismatch> {
    let x = Bv::var("x", width);
    let reference = x.or(&Bv::lit(1, width))?;
    let property = candidate::or_with_one(&x)?.eq(&reference)?;
    Ok(Check {
        name: "OR1".to_string(),
        script: counterexample_query(&[("x", width)], property),
    })
}

/// Negative control: the historical operand-swap bug in the signed
/// candidate. Must come back `sat` with a counterexample; used by the test
/// suite to prove the harness can actually fail.
pub fn signed_swapped_check(width: u32) -> Result<Check, WidthMismatch> {
    let lhs = Bv::var("lhs", width);
    let rhs = Bv::var("rhs", width);
    let result = candidate::signed_cmp_operand_swapped(&lhs, &rhs)?;
    let property = comparison_contract(Signedness::Signed, &lhs, &rhs, &result)?;
    Ok(Check {
        name: "SIGNED-SWAPPED".to_string(),
        script: counterexample_query(&[("lhs", width), ("rhs", width)], property),
    })
}

/// The checks the harness binary runs, in report order.
pub fn default_checks(width: u32) -> Result<Vec<Check>, WidthMismatch> {
    Ok(vec![
        signed_check(width)?,
        unsigned_check(width)?,
        or1_check(width)?,
    ])
}
