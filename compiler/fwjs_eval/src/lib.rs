//! FWJS Eval - tree-walking evaluator for featherweight JS.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Value`: the closed runtime value set, closures compared by identity
//! - `Environment`: parent-linked scope chain shared by closures
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: recursive `eval(ExprId)` over an `ExprArena`
//! - `PrintHandlerImpl`: destination of the `print` side effect

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{DeclareError, Environment, LocalScope, Scope, UpdateOutcome};
pub use errors::{
    division_by_zero, duplicate_declaration, modulo_by_zero, not_callable,
    recursion_limit_exceeded, type_mismatch, wrong_arg_count, EvalError, EvalErrorKind,
    EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{ClosureValue, Heap, Value};

#[cfg(test)]
mod tests;
