/// SMT-LIB term (expression) representation, QF_BV fragment.
///
/// The variant set is exactly what the comparison contracts and candidate
/// algorithms need: boolean connectives for the bi-implications, both the
/// signed and the unsigned bit-vector comparison families, and the
/// arithmetic/bitwise operators available on the target machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    // === Literals ===
    /// Boolean literal
    BoolLit(bool),
    /// Bitvector literal with value (unsigned bit pattern) and width
    BitVecLit(u64, u32),

    // === Variables ===
    /// Named constant/variable reference
    Const(String),

    // === Boolean operations ===
    /// Logical NOT
    Not(Box<Term>),
    /// Logical AND (n-ary)
    And(Vec<Term>),
    /// Logical if-and-only-if: `(= a b)` for Bool
    Iff(Box<Term>, Box<Term>),

    // === Core ===
    /// Equality: `(= a b)`
    Eq(Box<Term>, Box<Term>),
    /// If-then-else: `(ite cond then else)`
    Ite(Box<Term>, Box<Term>, Box<Term>),

    // === Bitvector arithmetic ===
    /// `(bvadd a b)`
    BvAdd(Box<Term>, Box<Term>),
    /// `(bvsub a b)`
    BvSub(Box<Term>, Box<Term>),
    /// `(bvneg a)` — two's complement negation
    BvNeg(Box<Term>),

    // === Bitvector comparison (signed) ===
    /// `(bvslt a b)` — signed less-than
    BvSLt(Box<Term>, Box<Term>),
    /// `(bvsle a b)` — signed less-or-equal
    BvSLe(Box<Term>, Box<Term>),
    /// `(bvsgt a b)` — signed greater-than
    BvSGt(Box<Term>, Box<Term>),
    /// `(bvsge a b)` — signed greater-or-equal
    BvSGe(Box<Term>, Box<Term>),

    // === Bitvector comparison (unsigned) ===
    /// `(bvult a b)` — unsigned less-than
    BvULt(Box<Term>, Box<Term>),
    /// `(bvule a b)` — unsigned less-or-equal
    BvULe(Box<Term>, Box<Term>),
    /// `(bvugt a b)` — unsigned greater-than
    BvUGt(Box<Term>, Box<Term>),
    /// `(bvuge a b)` — unsigned greater-or-equal
    BvUGe(Box<Term>, Box<Term>),

    // === Bitvector bitwise ===
    /// `(bvand a b)`
    BvAnd(Box<Term>, Box<Term>),
    /// `(bvor a b)`
    BvOr(Box<Term>, Box<Term>),
    /// `(bvxor a b)`
    BvXor(Box<Term>, Box<Term>),
    /// `(bvnot a)`
    BvNot(Box<Term>),
}

impl Term {
    /// Convenience constructor for a named constant.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Const(name.into())
    }
}
