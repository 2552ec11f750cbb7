use std::io::Write;
use std::process::{Command as Process, Stdio};

use cmpcheck_smtlib::{Command, Script};

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::parser::parse_output;
use crate::verdict::Verdict;

/// Subprocess-backed SMT solver.
///
/// Each call to [`check`](SmtSolver::check) spawns a fresh solver process,
/// so queries share no state and can run concurrently from different
/// threads.
#[derive(Debug, Clone)]
pub struct SmtSolver {
    config: SolverConfig,
}

impl SmtSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Auto-detected Z3 with default settings.
    pub fn with_default_config() -> Result<Self, SolverError> {
        Ok(Self {
            config: SolverConfig::auto_detect()?,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check satisfiability of a script.
    ///
    /// Renders the script to SMT-LIB2 text; `(check-sat)` and `(get-model)`
    /// are appended when the script does not already carry them.
    pub fn check(&self, script: &Script) -> Result<Verdict, SolverError> {
        let mut smtlib = script.to_string();

        let has_check_sat = script
            .commands()
            .iter()
            .any(|c| matches!(c, Command::CheckSat));
        let has_get_model = script
            .commands()
            .iter()
            .any(|c| matches!(c, Command::GetModel));
        if !has_check_sat {
            smtlib.push_str("(check-sat)\n");
        }
        if !has_get_model {
            smtlib.push_str("(get-model)\n");
        }

        self.check_raw(&smtlib)
    }

    /// Check satisfiability of raw SMT-LIB2 text.
    pub fn check_raw(&self, smtlib: &str) -> Result<Verdict, SolverError> {
        self.config.validate()?;

        let mut child = Process::new(&self.config.binary)
            .args(self.config.build_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SolverError::Process(format!("failed to start solver: {e}")))?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| SolverError::Process("failed to open solver stdin".to_string()))?;
            stdin
                .write_all(smtlib.as_bytes())
                .map_err(|e| SolverError::Process(format!("failed to write query: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SolverError::Process(format!("failed to wait for solver: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        parse_output(&stdout, &stderr)
    }
}
