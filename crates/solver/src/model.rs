/// A model (counterexample) extracted from `(get-model)` output.
///
/// Assignments keep the raw value strings as the solver printed them;
/// [`Model::get_bits`] decodes the bit-vector literal syntaxes the supported
/// backends emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    assignments: Vec<(String, String)>,
}

impl Model {
    pub fn new(assignments: Vec<(String, String)>) -> Self {
        Self { assignments }
    }

    /// Raw value string for a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Decode a variable's value as an unsigned bit pattern.
    ///
    /// Accepts the three literal forms seen in the wild: `#x1f` (Z3, CVC5),
    /// `#b0101` (Z3 for widths not divisible by four), and `(_ bv31 8)`
    /// (Yices, CVC5 in some modes).
    pub fn get_bits(&self, name: &str) -> Option<u64> {
        decode_bv_literal(self.get(name)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Decode an SMT-LIB bit-vector literal string to its unsigned value.
pub(crate) fn decode_bv_literal(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("#x") {
        return u64::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = text.strip_prefix("#b") {
        return u64::from_str_radix(bin, 2).ok();
    }
    if let Some(inner) = text.strip_prefix("(_ bv") {
        let inner = inner.strip_suffix(')')?;
        let value = inner.split_whitespace().next()?;
        return value.parse().ok();
    }
    None
}
