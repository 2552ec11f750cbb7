//! Concrete evaluation of closed QF_BV terms.
//!
//! When a solver answers `sat` it hands back a model. Before the harness
//! reports that model as a counterexample, it substitutes the assignment back
//! into the asserted formula and evaluates it here. A model that does not
//! make the formula true indicates a broken solver or a broken parse, and is
//! reported as an error rather than a counterexample.

use std::collections::HashMap;
use std::fmt;

use crate::term::Term;

/// A concrete value: either a boolean or a bit pattern of a known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    /// Bit pattern in the low `width` bits of `bits`. Widths up to 64.
    Bits { bits: u64, width: u32 },
}

impl Value {
    pub fn bits(bits: u64, width: u32) -> Self {
        Value::Bits {
            bits: mask(bits, width),
            width,
        }
    }
}

/// Evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A constant had no binding in the environment.
    Unbound(String),
    /// An operand had the wrong sort for its operator.
    SortMismatch(&'static str),
    /// Two operands of one operator had different widths.
    WidthMismatch(&'static str),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Unbound(name) => write!(f, "unbound constant: {name}"),
            EvalError::SortMismatch(op) => write!(f, "sort mismatch in {op}"),
            EvalError::WidthMismatch(op) => write!(f, "width mismatch in {op}"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Variable assignment for evaluation.
pub type Env = HashMap<String, Value>;

fn mask(bits: u64, width: u32) -> u64 {
    if width >= 64 {
        bits
    } else {
        bits & ((1u64 << width) - 1)
    }
}

/// Reinterpret the low `width` bits as a signed value.
fn to_signed(bits: u64, width: u32) -> i64 {
    let shift = 64 - width;
    ((bits << shift) as i64) >> shift
}

fn as_bool(v: Value, op: &'static str) -> Result<bool, EvalError> {
    match v {
        Value::Bool(b) => Ok(b),
        Value::Bits { .. } => Err(EvalError::SortMismatch(op)),
    }
}

fn as_bits(v: Value, op: &'static str) -> Result<(u64, u32), EvalError> {
    match v {
        Value::Bits { bits, width } => Ok((bits, width)),
        Value::Bool(_) => Err(EvalError::SortMismatch(op)),
    }
}

fn bits_pair(
    env: &Env,
    a: &Term,
    b: &Term,
    op: &'static str,
) -> Result<(u64, u64, u32), EvalError> {
    let (av, aw) = as_bits(eval(a, env)?, op)?;
    let (bv, bw) = as_bits(eval(b, env)?, op)?;
    if aw != bw {
        return Err(EvalError::WidthMismatch(op));
    }
    Ok((av, bv, aw))
}

/// Evaluate a closed term under `env`.
pub fn eval(term: &Term, env: &Env) -> Result<Value, EvalError> {
    match term {
        Term::BoolLit(b) => Ok(Value::Bool(*b)),
        Term::BitVecLit(bits, width) => Ok(Value::bits(*bits, *width)),
        Term::Const(name) => env
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::Unbound(name.clone())),

        Term::Not(t) => Ok(Value::Bool(!as_bool(eval(t, env)?, "not")?)),
        Term::And(ts) => {
            for t in ts {
                if !as_bool(eval(t, env)?, "and")? {
                    return Ok(Value::Bool(false));
                }
            }
            Ok(Value::Bool(true))
        }
        Term::Iff(a, b) => {
            let av = as_bool(eval(a, env)?, "iff")?;
            let bv = as_bool(eval(b, env)?, "iff")?;
            Ok(Value::Bool(av == bv))
        }

        Term::Eq(a, b) => {
            let av = eval(a, env)?;
            let bv = eval(b, env)?;
            match (av, bv) {
                (Value::Bool(x), Value::Bool(y)) => Ok(Value::Bool(x == y)),
                (Value::Bits { bits: x, width: wx }, Value::Bits { bits: y, width: wy }) => {
                    if wx != wy {
                        return Err(EvalError::WidthMismatch("="));
                    }
                    Ok(Value::Bool(x == y))
                }
                _ => Err(EvalError::SortMismatch("=")),
            }
        }
        Term::Ite(cond, then, els) => {
            if as_bool(eval(cond, env)?, "ite")? {
                eval(then, env)
            } else {
                eval(els, env)
            }
        }

        Term::BvAdd(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvadd")?;
            Ok(Value::bits(x.wrapping_add(y), w))
        }
        Term::BvSub(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvsub")?;
            Ok(Value::bits(x.wrapping_sub(y), w))
        }
        Term::BvNeg(a) => {
            let (x, w) = as_bits(eval(a, env)?, "bvneg")?;
            Ok(Value::bits(x.wrapping_neg(), w))
        }

        Term::BvSLt(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvslt")?;
            Ok(Value::Bool(to_signed(x, w) < to_signed(y, w)))
        }
        Term::BvSLe(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvsle")?;
            Ok(Value::Bool(to_signed(x, w) <= to_signed(y, w)))
        }
        Term::BvSGt(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvsgt")?;
            Ok(Value::Bool(to_signed(x, w) > to_signed(y, w)))
        }
        Term::BvSGe(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvsge")?;
            Ok(Value::Bool(to_signed(x, w) >= to_signed(y, w)))
        }

        Term::BvULt(a, b) => {
            let (x, y, _) = bits_pair(env, a, b, "bvult")?;
            Ok(Value::Bool(x < y))
        }
        Term::BvULe(a, b) => {
            let (x, y, _) = bits_pair(env, a, b, "bvule")?;
            Ok(Value::Bool(x <= y))
        }
        Term::BvUGt(a, b) => {
            let (x, y, _) = bits_pair(env, a, b, "bvugt")?;
            Ok(Value::Bool(x > y))
        }
        Term::BvUGe(a, b) => {
            let (x, y, _) = bits_pair(env, a, b, "bvuge")?;
            Ok(Value::Bool(x >= y))
        }

        Term::BvAnd(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvand")?;
            Ok(Value::bits(x & y, w))
        }
        Term::BvOr(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvor")?;
            Ok(Value::bits(x | y, w))
        }
        Term::BvXor(a, b) => {
            let (x, y, w) = bits_pair(env, a, b, "bvxor")?;
            Ok(Value::bits(x ^ y, w))
        }
        Term::BvNot(a) => {
            let (x, w) = as_bits(eval(a, env)?, "bvnot")?;
            Ok(Value::bits(!x, w))
        }
    }
}
