//! Candidate algorithms: the closed-form expressions under test.
//!
//! These model the instruction sequences the target actually runs, using
//! only operations it has (XOR, AND, OR, ADD, SUB, and a select on a sign
//! test). The shared idea: when the operands' sign bits agree, `lhs - rhs`
//! cannot overflow and its sign is the answer; when they disagree, the
//! answer is decided by the sign bit alone, and OR-ing with 1 forces the
//! value nonzero while preserving its sign.

use cmpcheck_smtlib::{Bv, WidthMismatch};

/// Signed comparison value: `ite((lhs ^ rhs) <s 0, lhs | 1, lhs - rhs)`.
///
/// On sign mismatch the answer has the sign of `lhs`: a negative `lhs`
/// against a non-negative `rhs` is less, and vice versa.
pub fn signed_cmp(lhs: &Bv, rhs: &Bv) -> Result<Bv, WidthMismatch> {
    let one = Bv::lit(1, lhs.width());
    let sign_mismatch = lhs.xor(rhs)?.is_negative();
    Bv::ite(sign_mismatch, &lhs.or(&one)?, &lhs.sub(rhs)?)
}

/// Unsigned comparison value: `ite((lhs ^ rhs) <s 0, rhs | 1, lhs - rhs)`.
///
/// On sign-bit mismatch the operand with the top bit set is the larger one
/// unsigned, so the answer has the sign of `rhs`: if `rhs` has its top bit
/// set, `lhs` is less.
pub fn unsigned_cmp(lhs: &Bv, rhs: &Bv) -> Result<Bv, WidthMismatch> {
    let one = Bv::lit(1, lhs.width());
    let sign_mismatch = lhs.xor(rhs)?.is_negative();
    Bv::ite(sign_mismatch, &rhs.or(&one)?, &lhs.sub(rhs)?)
}

/// The historical buggy *signed* variant that yields `rhs` in the mismatch
/// branch. Kept as a negative control: the harness must report a concrete
/// counterexample for it, not a pass.
pub fn signed_cmp_operand_swapped(lhs: &Bv, rhs: &Bv) -> Result<Bv, WidthMismatch> {
    let sign_mismatch = lhs.xor(rhs)?.is_negative();
    Bv::ite(sign_mismatch, rhs, &lhs.sub(rhs)?)
}

/// OR-with-1 without a bitwise-or instruction: `(x & -2) + 1`.
///
/// Clearing the low bit first makes the increment carry-free, so the result
/// equals `x | 1`. Verified against that direct reference identity.
pub fn or_with_one(x: &Bv) -> Result<Bv, WidthMismatch> {
    x.and(&Bv::lit_signed(-2, x.width()))?.add(&Bv::lit(1, x.width()))
}
