//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure. The factory
//! functions below are the construction API; evaluator code never builds an
//! `EvalError` by hand.
//!
//! Every error aborts the whole evaluation. Reading an unbound name is not
//! an error, and neither is writing one (that creates a global).

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// An operand or condition had the wrong runtime type.
    #[error("type mismatch in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: &'static str,
    },

    /// The callee of a call was not a function.
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A name was declared twice in the same scope.
    #[error("duplicate declaration of `{name}` in the same scope")]
    DuplicateDeclaration { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    /// Closure application nested deeper than the configured limit.
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> EvalErrorKind {
        self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Operator and Condition Errors

/// A value of type `got` appeared where `expected` was required.
///
/// `context` names the construct, e.g. "if condition" or "operator `+`".
#[cold]
pub fn type_mismatch(
    context: impl Into<String>,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::ModuloByZero)
}

// Call Errors

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name })
}

/// Argument count differs from the closure's parameter count.
#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth: limit })
}

// Binding Errors

#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}
