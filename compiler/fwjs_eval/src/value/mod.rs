//! Runtime values.
//!
//! The variant set is closed: integers, booleans, null and closures.
//! Operator code matches on it exhaustively; there are no casts.
//!
//! Closures are allocated through [`Value::closure`] and compared by
//! identity, so two evaluations of the same function literal yield two
//! unequal values.

mod heap;

use std::fmt;

use fwjs_ir::{ExprId, Name, SharedArena};

use crate::Environment;

pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Fixed-width integer.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Absence of a value. Unbound reads, `while` and an `if` with no taken
    /// branch all evaluate to this.
    Null,
    /// Function value with its captured environment.
    Closure(Heap<ClosureValue>),
}

impl Value {
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Allocate a closure value.
    pub fn closure(closure: ClosureValue) -> Self {
        Value::Closure(Heap::new(closure))
    }

    /// Type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Closure(_) => "function",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&ClosureValue> {
        match self {
            Value::Closure(c) => Some(&**c),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => write!(f, "Null"),
            Value::Closure(c) => fmt::Debug::fmt(&**c, f),
        }
    }
}

/// Canonical textual form, as written by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Closure(c) => write!(f, "<closure/{}>", c.arity()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A function literal evaluated in some environment.
///
/// `env` is the scope that was current when the literal was evaluated, held
/// by reference: later writes to that scope are visible to the closure.
/// `arena` is the arena `body` indexes into.
pub struct ClosureValue {
    params: Vec<Name>,
    body: ExprId,
    env: Environment,
    arena: SharedArena,
}

impl ClosureValue {
    pub fn new(params: Vec<Name>, body: ExprId, env: Environment, arena: SharedArena) -> Self {
        ClosureValue {
            params,
            body,
            env,
            arena,
        }
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Body expression, `ExprId::INVALID` for an empty body.
    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }

    /// The captured (definition-site) environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }
}

// Does not print the captured environment: it may contain this closure.
impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
