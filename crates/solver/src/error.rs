use std::fmt;
use std::path::PathBuf;

use crate::config::SolverKind;

/// Errors from driving the external solver process.
///
/// Note that `sat`, `unsat`, and `unknown` are all successful interactions
/// and live in [`Verdict`](crate::Verdict); these errors mean the
/// interaction itself broke down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Backend binary not found at the given path.
    NotFound(SolverKind, PathBuf),
    /// Process failed to start, crashed, or its pipes broke.
    Process(String),
    /// Solver output did not match any expected shape.
    Parse(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::NotFound(kind, path) => {
                write!(f, "{kind} binary not found at: {}", path.display())
            }
            SolverError::Process(msg) => write!(f, "solver process error: {msg}"),
            SolverError::Parse(msg) => write!(f, "failed to parse solver output: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = SolverError::NotFound(SolverKind::Z3, PathBuf::from("/no/z3"));
        assert_eq!(err.to_string(), "Z3 binary not found at: /no/z3");
    }

    #[test]
    fn display_process_and_parse() {
        assert_eq!(
            SolverError::Process("broken pipe".to_string()).to_string(),
            "solver process error: broken pipe"
        );
        assert_eq!(
            SolverError::Parse("garbage".to_string()).to_string(),
            "failed to parse solver output: garbage"
        );
    }
}
