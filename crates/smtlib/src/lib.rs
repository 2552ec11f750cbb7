//! # cmpcheck-smtlib
//!
//! SMT-LIB2 building blocks for the comparison-verification harness,
//! restricted to the quantifier-free bit-vector fragment (`QF_BV`).
//!
//! The harness constructs formulas as [`Term`] trees, collects them into a
//! [`Script`] of commands, and renders the script to SMT-LIB2 text via
//! `Display`. The [`bv`] module layers a width-checked expression builder on
//! top of the raw AST so that mixed-width operands are rejected at
//! construction time, and [`eval`] provides a concrete evaluator used to
//! substitute solver models back into the formulas they claim to satisfy.

pub mod bv;
pub mod command;
pub mod eval;
pub mod formatter;
pub mod script;
pub mod sort;
pub mod term;

pub use bv::{Bv, WidthMismatch};
pub use command::Command;
pub use eval::{EvalError, Value, eval};
pub use script::Script;
pub use sort::Sort;
pub use term::Term;
