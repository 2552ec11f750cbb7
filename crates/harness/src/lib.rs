//! # cmpcheck
//!
//! Correctness-verification harness for the branchless integer-comparison
//! primitives used on targets without set-if-greater/less instructions.
//!
//! Each primitive computes a single signed comparison value whose sign
//! encodes the relational outcome of comparing two words. The tricks
//! involved (XOR sign detection, OR via AND/ADD) are easy to get subtly
//! wrong at overflow boundaries, so instead of sampling inputs the harness
//! proves each primitive correct: it encodes the primitive and its
//! relational contract as quantifier-free bit-vector logic, asserts the
//! *negation* of their equivalence, and asks an SMT solver for a witness.
//! `unsat` is a proof over every input pair; `sat` is a concrete
//! counterexample, which is substituted back into the formula before being
//! reported.
//!
//! Pipeline per check: encode ([`contract`], [`candidate`]) → build query
//! ([`query`]) → solve ([`run`]) → report ([`report`]).

pub mod candidate;
pub mod checks;
pub mod contract;
pub mod query;
pub mod report;
pub mod run;

pub use checks::{Check, default_checks};
pub use contract::Signedness;
pub use run::{CheckResult, Outcome, run_checks};
