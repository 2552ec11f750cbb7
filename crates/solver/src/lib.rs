//! # cmpcheck-solver
//!
//! Decision-procedure driver for the comparison-verification harness.
//!
//! The solver is treated as a black box behind a narrow capability surface:
//! declare free variables and assert a formula (both carried in an SMT-LIB2
//! [`Script`](cmpcheck_smtlib::Script)), check satisfiability, and pull a
//! model when the answer is `sat`. Communication is by spawning an external
//! solver binary (Z3, CVC5, or Yices2) and piping SMT-LIB2 text through
//! stdin/stdout, so backends can be swapped without touching the encoder or
//! the query builder.
//!
//! ```no_run
//! use cmpcheck_solver::{SmtSolver, Verdict};
//!
//! let solver = SmtSolver::with_default_config().unwrap();
//! match solver.check_raw("(declare-const x (_ BitVec 8))\n(assert (bvult x #x03))\n").unwrap() {
//!     Verdict::Unsat => println!("proved"),
//!     Verdict::Sat(model) => println!("counterexample: {model:?}"),
//!     Verdict::Unknown(reason) => println!("inconclusive: {reason}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
mod parser;
pub mod solver;
pub mod verdict;

pub use config::{SolverConfig, SolverKind};
pub use error::SolverError;
pub use model::Model;
pub use solver::SmtSolver;
pub use verdict::Verdict;
