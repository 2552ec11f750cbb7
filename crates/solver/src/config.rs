use std::fmt;
use std::path::PathBuf;

use crate::error::SolverError;

/// Supported SMT solver backends.
///
/// All three speak SMT-LIB2 over stdin and decide `QF_BV`, so the harness is
/// indifferent to which one answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Z3,
    Cvc5,
    Yices,
}

impl SolverKind {
    /// Binary name used for PATH lookup.
    pub fn binary_name(&self) -> &'static str {
        match self {
            SolverKind::Z3 => "z3",
            SolverKind::Cvc5 => "cvc5",
            SolverKind::Yices => "yices-smt2",
        }
    }

    /// Installation paths probed when PATH lookup fails.
    fn fallback_paths(&self) -> &'static [&'static str] {
        match self {
            SolverKind::Z3 => &["/opt/homebrew/bin/z3", "/usr/local/bin/z3", "/usr/bin/z3"],
            SolverKind::Cvc5 => &[
                "/opt/homebrew/bin/cvc5",
                "/usr/local/bin/cvc5",
                "/usr/bin/cvc5",
            ],
            SolverKind::Yices => &[
                "/opt/homebrew/bin/yices-smt2",
                "/usr/local/bin/yices-smt2",
                "/usr/bin/yices-smt2",
            ],
        }
    }

    /// CLI arguments that put the backend into read-from-stdin mode with
    /// model production enabled.
    pub fn stdin_args(&self) -> Vec<String> {
        match self {
            SolverKind::Z3 => vec!["-in".to_string()],
            SolverKind::Cvc5 => vec![
                "--lang".to_string(),
                "smt2".to_string(),
                "--produce-models".to_string(),
            ],
            SolverKind::Yices => Vec::new(),
        }
    }

    /// Per-query timeout argument, if the backend supports one.
    pub fn timeout_arg(&self, timeout_ms: u64) -> Option<String> {
        if timeout_ms == 0 {
            return None;
        }
        match self {
            SolverKind::Z3 => Some(format!("-t:{timeout_ms}")),
            SolverKind::Cvc5 => Some(format!("--tlimit={timeout_ms}")),
            // Yices takes whole seconds; round up so a short limit is not
            // silently dropped to zero (= unlimited).
            SolverKind::Yices => Some(format!("--timeout={}", timeout_ms.div_ceil(1000))),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Z3 => write!(f, "Z3"),
            SolverKind::Cvc5 => write!(f, "CVC5"),
            SolverKind::Yices => write!(f, "Yices"),
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z3" => Ok(SolverKind::Z3),
            "cvc5" => Ok(SolverKind::Cvc5),
            "yices" | "yices2" | "yices-smt2" => Ok(SolverKind::Yices),
            _ => Err(format!("unknown solver: {s} (valid: z3, cvc5, yices)")),
        }
    }
}

/// Backend configuration: which binary to run and how.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub kind: SolverKind,
    /// Path to the solver binary.
    pub binary: PathBuf,
    /// Per-query timeout in milliseconds (0 = no timeout).
    pub timeout_ms: u64,
    /// Additional backend arguments.
    pub extra_args: Vec<String>,
}

impl SolverConfig {
    pub fn new(kind: SolverKind, binary: PathBuf) -> Self {
        Self {
            kind,
            binary,
            timeout_ms: 0,
            extra_args: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Locate the backend binary: `which` first, then the usual install
    /// directories.
    pub fn auto_detect_for(kind: SolverKind) -> Result<Self, SolverError> {
        let binary = kind.binary_name();

        if let Ok(output) = std::process::Command::new("which").arg(binary).output()
            && output.status.success()
        {
            let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !found.is_empty() {
                let path = PathBuf::from(&found);
                if path.exists() {
                    return Ok(Self::new(kind, path));
                }
            }
        }

        for candidate in kind.fallback_paths() {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(Self::new(kind, path));
            }
        }

        Err(SolverError::NotFound(kind, PathBuf::from(binary)))
    }

    /// Auto-detect Z3, the default backend.
    pub fn auto_detect() -> Result<Self, SolverError> {
        Self::auto_detect_for(SolverKind::Z3)
    }

    /// Full argument list for one invocation.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = self.kind.stdin_args();
        if let Some(timeout) = self.kind.timeout_arg(self.timeout_ms) {
            args.push(timeout);
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Check that the configured binary exists before spawning it.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.binary.exists() {
            return Err(SolverError::NotFound(self.kind, self.binary.clone()));
        }
        Ok(())
    }
}
