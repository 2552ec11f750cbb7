//! Relational contracts: the ground-truth specification a candidate must
//! match.
//!
//! A contract is the conjunction of three bi-implications over the operands
//! and the candidate's result:
//!
//! * result is negative  ⟺  `lhs < rhs`
//! * result is positive  ⟺  `lhs > rhs`
//! * result is zero      ⟺  `lhs = rhs`
//!
//! where `<`/`>` are the *signed* bit-vector comparisons for
//! [`Signedness::Signed`] and the *unsigned* ones for
//! [`Signedness::Unsigned`]. The sign test on the result is always signed —
//! the comparison value is a signed quantity under both contracts.
//!
//! The contract is expressed purely in the solver's native relational
//! operators; none of the candidate's bit tricks appear here. Keeping the
//! operator choice directly next to the interpretation tag below is the one
//! guard this code has against the signed/unsigned mixup that this harness
//! exists to catch.

use std::fmt;

use cmpcheck_smtlib::{Bv, Term, WidthMismatch};

/// Interpretation of the operands being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signedness::Signed => write!(f, "signed"),
            Signedness::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// Build the three-way comparison contract relating `result` to `lhs` and
/// `rhs` under the given interpretation.
///
/// Fails fast if the operands disagree in width, or if the candidate's
/// result does — a result of the wrong width would otherwise produce a
/// well-typed but vacuous query.
pub fn comparison_contract(
    sign: Signedness,
    lhs: &Bv,
    rhs: &Bv,
    result: &Bv,
) -> Result<Term, WidthMismatch> {
    if result.width() != lhs.width() {
        return Err(WidthMismatch {
            op: "contract",
            lhs_width: lhs.width(),
            rhs_width: result.width(),
        });
    }
    let zero = Bv::lit(0, result.width());

    let (lt, gt) = match sign {
        Signedness::Signed => (lhs.slt(rhs)?, lhs.sgt(rhs)?),
        Signedness::Unsigned => (lhs.ult(rhs)?, lhs.ugt(rhs)?),
    };

    Ok(Term::And(vec![
        Term::Iff(Box::new(lt), Box::new(result.slt(&zero)?)),
        Term::Iff(Box::new(gt), Box::new(result.sgt(&zero)?)),
        Term::Iff(Box::new(lhs.eq(rhs)?), Box::new(result.eq(&zero)?)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands() -> (Bv, Bv, Bv) {
        (Bv::var("lhs", 32), Bv::var("rhs", 32), Bv::var("res", 32))
    }

    #[test]
    fn signed_contract_uses_only_signed_relations() {
        let (lhs, rhs, res) = operands();
        let text = comparison_contract(Signedness::Signed, &lhs, &rhs, &res)
            .unwrap()
            .to_string();
        assert!(text.contains("(bvslt lhs rhs)"));
        assert!(text.contains("(bvsgt lhs rhs)"));
        assert!(!text.contains("bvult"));
        assert!(!text.contains("bvugt"));
    }

    #[test]
    fn unsigned_contract_uses_unsigned_relations_on_operands() {
        let (lhs, rhs, res) = operands();
        let text = comparison_contract(Signedness::Unsigned, &lhs, &rhs, &res)
            .unwrap()
            .to_string();
        assert!(text.contains("(bvult lhs rhs)"));
        assert!(text.contains("(bvugt lhs rhs)"));
        // The result's sign test stays signed even under the unsigned contract.
        assert!(text.contains("(bvslt res #x00000000)"));
        assert!(text.contains("(bvsgt res #x00000000)"));
    }

    #[test]
    fn contract_is_three_biimplications() {
        let (lhs, rhs, res) = operands();
        let term = comparison_contract(Signedness::Signed, &lhs, &rhs, &res).unwrap();
        match term {
            Term::And(clauses) => {
                assert_eq!(clauses.len(), 3);
                assert!(clauses.iter().all(|c| matches!(c, Term::Iff(_, _))));
            }
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn operand_width_mismatch_fails_fast() {
        let lhs = Bv::var("lhs", 32);
        let rhs = Bv::var("rhs", 16);
        let res = Bv::var("res", 32);
        assert!(comparison_contract(Signedness::Signed, &lhs, &rhs, &res).is_err());
    }

    #[test]
    fn result_width_mismatch_fails_fast() {
        let lhs = Bv::var("lhs", 16);
        let rhs = Bv::var("rhs", 16);
        let res = Bv::var("res", 32);
        let err = comparison_contract(Signedness::Signed, &lhs, &rhs, &res).unwrap_err();
        assert_eq!(err.op, "contract");
    }
}
