use crate::model::Model;

/// The decision procedure's answer to one query.
///
/// The harness asserts the negation of the property it wants to prove, so
/// `Unsat` is the proof and `Sat` carries the counterexample. `Unknown` is a
/// distinct outcome and must never be collapsed into either of the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No assignment satisfies the asserted formula.
    Unsat,
    /// A witnessing assignment exists; `None` if the backend reported `sat`
    /// but no model could be extracted.
    Sat(Option<Model>),
    /// The procedure gave up (timeout, resource limit), with its reason.
    Unknown(String),
}

impl Verdict {
    pub fn is_unsat(&self) -> bool {
        matches!(self, Verdict::Unsat)
    }

    pub fn is_sat(&self) -> bool {
        matches!(self, Verdict::Sat(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Verdict::Unknown(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            Verdict::Sat(Some(model)) => Some(model),
            _ => None,
        }
    }
}
