//! Parsing of solver stdout into a [`Verdict`].
//!
//! The first meaningful line is `sat`, `unsat`, or `unknown`; on `sat` the
//! rest of the output is the `(get-model)` dump, from which nullary
//! `define-fun` entries are collected. Both model framings are handled:
//!
//! ```text
//! (model                      (
//!   (define-fun x () ... v)     (define-fun x () ... v)
//! )                           )
//! ```

use crate::error::SolverError;
use crate::model::Model;
use crate::verdict::Verdict;

/// Parse one invocation's stdout/stderr into a verdict.
pub fn parse_output(stdout: &str, stderr: &str) -> Result<Verdict, SolverError> {
    let stdout = stdout.trim();

    if stdout.is_empty() {
        if stderr.contains("timeout") {
            return Ok(Verdict::Unknown("timeout".to_string()));
        }
        return Err(SolverError::Parse(format!(
            "empty solver output, stderr: {stderr}"
        )));
    }

    let first_line = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    match first_line {
        "unsat" => Ok(Verdict::Unsat),
        "sat" => Ok(Verdict::Sat(parse_model(stdout))),
        "unknown" => Ok(Verdict::Unknown(unknown_reason(stdout, stderr))),
        "timeout" => Ok(Verdict::Unknown("timeout".to_string())),
        other => Err(SolverError::Parse(format!(
            "unexpected solver output: {other}"
        ))),
    }
}

/// Pull a reason line for an `unknown` answer, if the solver printed one.
fn unknown_reason(stdout: &str, stderr: &str) -> String {
    let after_unknown = stdout
        .lines()
        .skip_while(|line| line.trim() != "unknown")
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty());

    if let Some(reason) = after_unknown {
        reason
            .trim_start_matches('(')
            .trim_end_matches(')')
            .to_string()
    } else if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        "unknown".to_string()
    }
}

/// Collect nullary `define-fun` assignments from the model dump.
fn parse_model(output: &str) -> Option<Model> {
    let mut assignments = Vec::new();
    let mut pos = 0;

    while let Some(offset) = output[pos..].find("(define-fun ") {
        let start = pos + offset;
        match sexp_end(output, start) {
            Some(end) => {
                let body = &output[start + "(define-fun ".len()..end - 1];
                if let Some(pair) = parse_define_fun(body) {
                    assignments.push(pair);
                }
                pos = end;
            }
            None => break,
        }
    }

    if assignments.is_empty() {
        None
    } else {
        Some(Model::new(assignments))
    }
}

/// Parse the body of one `define-fun` (name, parameter list, sort, value).
/// Entries with parameters are not constants and are skipped.
fn parse_define_fun(body: &str) -> Option<(String, String)> {
    let normalized: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let body = normalized.trim();

    let name_end = body.find(' ')?;
    let name = &body[..name_end];
    let rest = body[name_end..].trim_start();

    let rest = rest.strip_prefix("()")?.trim_start();

    // Skip the sort (an atom like `Bool` or a compound like `(_ BitVec 32)`),
    // the remainder is the value.
    let after_sort = skip_sexp(rest)?;
    let value = rest[after_sort..].trim();
    if value.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}

/// Index just past the S-expression opening at `start` (which must be `(`).
fn sexp_end(input: &str, start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.get(start) != Some(&b'(') {
        return None;
    }
    let mut depth = 1usize;
    let mut i = start + 1;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    (depth == 0).then_some(i)
}

/// Index just past the first S-expression (atom or compound) in `input`.
fn skip_sexp(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    if bytes[0] == b'(' {
        sexp_end(input, 0)
    } else {
        let end = input
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .unwrap_or(input.len());
        Some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsat_line() {
        assert_eq!(parse_output("unsat\n", "").unwrap(), Verdict::Unsat);
    }

    #[test]
    fn sat_without_model() {
        assert_eq!(parse_output("sat\n", "").unwrap(), Verdict::Sat(None));
    }

    #[test]
    fn unknown_with_reason() {
        let verdict = parse_output("unknown\n(timeout)\n", "").unwrap();
        assert_eq!(verdict, Verdict::Unknown("timeout".to_string()));
    }

    #[test]
    fn bare_timeout_line() {
        let verdict = parse_output("timeout\n", "").unwrap();
        assert_eq!(verdict, Verdict::Unknown("timeout".to_string()));
    }

    #[test]
    fn empty_output_is_error() {
        assert!(parse_output("", "").is_err());
    }

    #[test]
    fn garbage_is_error() {
        assert!(parse_output("segfault\n", "").is_err());
    }

    #[test]
    fn sat_with_wrapped_model() {
        let output = "\
sat
(model
  (define-fun lhs () (_ BitVec 32) #x80000000)
  (define-fun rhs () (_ BitVec 32) #x00000001)
)";
        let verdict = parse_output(output, "").unwrap();
        let model = verdict.model().unwrap();
        assert_eq!(model.get("lhs"), Some("#x80000000"));
        assert_eq!(model.get_bits("rhs"), Some(1));
    }

    #[test]
    fn sat_with_bare_paren_model() {
        // Z3 4.15+ omits the `model` keyword and wraps values onto new lines.
        let output = "\
sat
(
  (define-fun lhs () (_ BitVec 32)
    #xfffffffe)
)";
        let verdict = parse_output(output, "").unwrap();
        let model = verdict.model().unwrap();
        assert_eq!(model.get_bits("lhs"), Some(0xFFFF_FFFE));
    }

    #[test]
    fn sat_with_binary_literal() {
        let output = "sat\n((define-fun x () (_ BitVec 4) #b1010))";
        let verdict = parse_output(output, "").unwrap();
        assert_eq!(verdict.model().unwrap().get_bits("x"), Some(10));
    }

    #[test]
    fn non_nullary_define_funs_are_skipped() {
        let output = "\
sat
(
  (define-fun f ((a (_ BitVec 8))) (_ BitVec 8) a)
  (define-fun x () (_ BitVec 8) #x05)
)";
        let verdict = parse_output(output, "").unwrap();
        let model = verdict.model().unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.get_bits("x"), Some(5));
    }

    #[test]
    fn timeout_in_stderr_only() {
        let verdict = parse_output("", "timeout reached").unwrap();
        assert_eq!(verdict, Verdict::Unknown("timeout".to_string()));
    }
}
