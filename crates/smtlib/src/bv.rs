//! Width-checked bit-vector expression builder.
//!
//! [`Bv`] pairs a [`Term`] with the width it denotes. Every binary
//! constructor verifies that both operands share a width and returns
//! [`WidthMismatch`] otherwise, so an ill-typed query is rejected while it is
//! being encoded rather than handed to a solver.
//!
//! Signed and unsigned comparisons are separate methods (`slt`/`sgt` vs
//! `ult`/`ugt`). Picking the wrong family is the classic encoding bug in
//! this domain, so the choice stays visible at every call site.

use std::fmt;

use crate::term::Term;

/// Two operands of one operation had different widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthMismatch {
    /// SMT-LIB name of the operation being built.
    pub op: &'static str,
    pub lhs_width: u32,
    pub rhs_width: u32,
}

impl fmt::Display for WidthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width mismatch in {}: left operand is {} bits, right operand is {} bits",
            self.op, self.lhs_width, self.rhs_width
        )
    }
}

impl std::error::Error for WidthMismatch {}

/// A bit-vector expression tagged with its width.
#[derive(Debug, Clone, PartialEq)]
pub struct Bv {
    term: Term,
    width: u32,
}

impl Bv {
    /// A free bit-vector variable.
    pub fn var(name: impl Into<String>, width: u32) -> Self {
        Self {
            term: Term::Const(name.into()),
            width,
        }
    }

    /// A bit-vector literal. `value` is taken as an unsigned bit pattern and
    /// masked to `width`.
    pub fn lit(value: u64, width: u32) -> Self {
        Self {
            term: Term::BitVecLit(value, width),
            width,
        }
    }

    /// A literal from a signed value, wrapped two's-complement into `width`
    /// bits. `Bv::lit_signed(-2, 32)` is the `0xFFFFFFFE` pattern.
    pub fn lit_signed(value: i64, width: u32) -> Self {
        Self::lit(value as u64, width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn into_term(self) -> Term {
        self.term
    }

    fn check(&self, other: &Bv, op: &'static str) -> Result<(), WidthMismatch> {
        if self.width != other.width {
            return Err(WidthMismatch {
                op,
                lhs_width: self.width,
                rhs_width: other.width,
            });
        }
        Ok(())
    }

    fn binary(
        &self,
        other: &Bv,
        op: &'static str,
        make: fn(Box<Term>, Box<Term>) -> Term,
    ) -> Result<Bv, WidthMismatch> {
        self.check(other, op)?;
        Ok(Bv {
            term: make(Box::new(self.term.clone()), Box::new(other.term.clone())),
            width: self.width,
        })
    }

    fn predicate(
        &self,
        other: &Bv,
        op: &'static str,
        make: fn(Box<Term>, Box<Term>) -> Term,
    ) -> Result<Term, WidthMismatch> {
        self.check(other, op)?;
        Ok(make(
            Box::new(self.term.clone()),
            Box::new(other.term.clone()),
        ))
    }

    // --- Arithmetic ---

    pub fn add(&self, other: &Bv) -> Result<Bv, WidthMismatch> {
        self.binary(other, "bvadd", Term::BvAdd)
    }

    pub fn sub(&self, other: &Bv) -> Result<Bv, WidthMismatch> {
        self.binary(other, "bvsub", Term::BvSub)
    }

    pub fn neg(&self) -> Bv {
        Bv {
            term: Term::BvNeg(Box::new(self.term.clone())),
            width: self.width,
        }
    }

    // --- Bitwise ---

    pub fn and(&self, other: &Bv) -> Result<Bv, WidthMismatch> {
        self.binary(other, "bvand", Term::BvAnd)
    }

    pub fn or(&self, other: &Bv) -> Result<Bv, WidthMismatch> {
        self.binary(other, "bvor", Term::BvOr)
    }

    pub fn xor(&self, other: &Bv) -> Result<Bv, WidthMismatch> {
        self.binary(other, "bvxor", Term::BvXor)
    }

    pub fn not(&self) -> Bv {
        Bv {
            term: Term::BvNot(Box::new(self.term.clone())),
            width: self.width,
        }
    }

    // --- Comparisons, signed interpretation ---

    pub fn slt(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvslt", Term::BvSLt)
    }

    pub fn sle(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvsle", Term::BvSLe)
    }

    pub fn sgt(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvsgt", Term::BvSGt)
    }

    pub fn sge(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvsge", Term::BvSGe)
    }

    // --- Comparisons, unsigned interpretation ---

    pub fn ult(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvult", Term::BvULt)
    }

    pub fn ule(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvule", Term::BvULe)
    }

    pub fn ugt(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvugt", Term::BvUGt)
    }

    pub fn uge(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "bvuge", Term::BvUGe)
    }

    // --- Core ---

    pub fn eq(&self, other: &Bv) -> Result<Term, WidthMismatch> {
        self.predicate(other, "=", Term::Eq)
    }

    /// `(ite cond then else)` over two equal-width branches.
    pub fn ite(cond: Term, then: &Bv, els: &Bv) -> Result<Bv, WidthMismatch> {
        then.check(els, "ite")?;
        Ok(Bv {
            term: Term::Ite(
                Box::new(cond),
                Box::new(then.term.clone()),
                Box::new(els.term.clone()),
            ),
            width: then.width,
        })
    }

    /// Sign test: is this value negative under the signed interpretation?
    /// Always `bvslt` against zero, regardless of which contract the
    /// surrounding formula encodes.
    pub fn is_negative(&self) -> Term {
        Term::BvSLt(
            Box::new(self.term.clone()),
            Box::new(Term::BitVecLit(0, self.width)),
        )
    }
}
