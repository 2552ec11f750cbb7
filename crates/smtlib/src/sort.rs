/// SMT-LIB sort (type) representation.
///
/// Only the sorts the harness actually declares: booleans for properties and
/// fixed-width bit-vectors for comparison operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Boolean sort
    Bool,
    /// Fixed-width bitvector: `(_ BitVec n)`
    BitVec(u32),
}
