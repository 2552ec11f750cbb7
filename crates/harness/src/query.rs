//! Equivalence query construction.
//!
//! To prove a universal property `P` over all operand values, the query
//! asserts `(not P)` with the operands left as free constants and asks the
//! solver for a witness. `unsat` means no counterexample exists anywhere in
//! the domain, which is a complete proof of `P`; `sat` hands back a concrete
//! violating assignment. This negate-then-expect-unsat step is the
//! load-bearing move of the whole harness: asserting `P` directly and
//! reading `sat` as success would silently invert every verdict.

use cmpcheck_smtlib::{Command, Script, Sort, Term};

/// Build the counterexample-search script for a property over the given
/// free bit-vector variables.
pub fn counterexample_query(vars: &[(&str, u32)], property: Term) -> Script {
    let mut script = Script::new();
    script.push(Command::SetLogic("QF_BV".to_string()));
    for (name, width) in vars {
        script.push(Command::DeclareConst(
            (*name).to_string(),
            Sort::BitVec(*width),
        ));
    }
    script.push(Command::Assert(Term::Not(Box::new(property))));
    script.push(Command::CheckSat);
    script.push(Command::GetModel);
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_asserts_the_negation() {
        let property = Term::Eq(
            Box::new(Term::var("lhs")),
            Box::new(Term::var("lhs")),
        );
        let script = counterexample_query(&[("lhs", 32)], property.clone());

        let assertion = script.sole_assertion().unwrap();
        assert_eq!(assertion, &Term::Not(Box::new(property)));
    }

    #[test]
    fn query_declares_all_operands_at_their_width() {
        let script = counterexample_query(&[("lhs", 32), ("rhs", 32)], Term::BoolLit(true));
        let decls: Vec<(&str, &Sort)> = script.declarations().collect();
        assert_eq!(
            decls,
            vec![("lhs", &Sort::BitVec(32)), ("rhs", &Sort::BitVec(32))]
        );
    }

    #[test]
    fn query_text_shape() {
        let script = counterexample_query(&[("x", 8)], Term::BoolLit(true));
        let text = script.to_string();
        assert!(text.starts_with("(set-logic QF_BV)\n"));
        assert!(text.contains("(declare-const x (_ BitVec 8))"));
        assert!(text.contains("(assert (not true))"));
        assert!(text.ends_with("(check-sat)\n(get-model)\n"));
    }
}
