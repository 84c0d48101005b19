//! Tree-walking interpreter.
//!
//! `eval(ExprId)` is one recursive function over `ExprKind`. Evaluation is
//! strictly left to right and every error aborts the whole run.
//!
//! # Arena Threading
//!
//! A closure carries the `SharedArena` its body lives in. Applying it builds
//! a child interpreter over the callee's arena (`create_function_interpreter`)
//! so that the body's `ExprId`s are resolved against the right tree.
//!
//! # Recursion
//!
//! Every `eval` step runs under `ensure_sufficient_stack`, and closure
//! application depth is bounded by `max_call_depth`.

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use fwjs_ir::{ExprArena, ExprId, ExprKind, Name, SharedArena, StringInterner};
use fwjs_stack::ensure_sufficient_stack;

use crate::errors::{duplicate_declaration, not_callable, type_mismatch};
use crate::print_handler::SharedPrintHandler;
use crate::{evaluate_binary, ClosureValue, Environment, EvalResult, UpdateOutcome, Value};

/// Default limit on nested closure applications.
///
/// Native targets grow the stack with `stacker`, so the limit only guards
/// against runaway recursion. WASM has a fixed stack.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Tree-walking interpreter over one expression arena.
pub struct Interpreter<'a> {
    /// String interner for name lookup in diagnostics.
    interner: &'a StringInterner,
    /// Arena the current expressions index into.
    arena: SharedArena,
    /// Current environment.
    env: Environment,
    /// Destination of `print`.
    print_handler: SharedPrintHandler,
    /// `None` disables the limit.
    max_call_depth: Option<usize>,
    /// Number of closure applications enclosing this interpreter.
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default configuration.
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    pub fn builder(interner: &'a StringInterner, arena: SharedArena) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner, arena)
    }

    /// Evaluate a whole program against this interpreter's environment.
    ///
    /// `None` is the empty program and evaluates to null.
    pub fn run(&mut self, root: Option<ExprId>) -> EvalResult {
        tracing::debug!(nodes = self.arena.len(), "evaluation started");
        let result = self.eval(ExprId::from(root));
        match &result {
            Ok(value) => tracing::debug!(%value, "evaluation finished"),
            Err(err) => tracing::debug!(error = %err, "evaluation aborted"),
        }
        result
    }

    /// Evaluate one expression in the current environment.
    ///
    /// An absent child (`ExprId::INVALID`) evaluates to null.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        if !id.is_present() {
            return Ok(Value::Null);
        }
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let kind = *self.arena.kind(id);
        match kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Ident(name) => Ok(self.lookup(name)),
            ExprKind::Print(operand) => {
                let value = self.eval(operand)?;
                self.print_handler.write_line(&value.to_string());
                Ok(value)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond)? {
                Value::Bool(true) => self.eval(then_branch),
                Value::Bool(false) => self.eval(else_branch),
                other => Err(type_mismatch("if condition", "bool", other.type_name())),
            },
            ExprKind::While { cond, body } => self.eval_while(cond, body),
            ExprKind::Seq { first, second } => {
                self.eval(first)?;
                self.eval(second)
            }
            ExprKind::Block(inner) => self.eval_in_child_scope(inner),
            ExprKind::VarDecl { name, init } => {
                let value = self.eval(init)?;
                if self.env.declare(name, value).is_err() {
                    return Err(duplicate_declaration(self.interner.lookup(name)));
                }
                Ok(self.lookup(name))
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                if self.env.update(name, value) == UpdateOutcome::CreatedGlobal {
                    tracing::trace!(
                        name = self.interner.lookup(name),
                        "assignment created global binding"
                    );
                }
                Ok(self.lookup(name))
            }
            ExprKind::Function { params, body } => {
                let params = self.arena.get_params(params).to_vec();
                Ok(Value::closure(ClosureValue::new(
                    params,
                    body,
                    self.env.clone(),
                    self.arena.clone(),
                )))
            }
            ExprKind::Call { func, args } => {
                let closure = match self.eval(func)? {
                    Value::Closure(closure) => closure,
                    other => return Err(not_callable(other.type_name())),
                };
                // Argument ids live in the caller's arena
                let arena = self.arena.clone();
                let arg_ids = arena.get_expr_list(args);
                let mut arg_values = Vec::with_capacity(arg_ids.len());
                for &arg in arg_ids {
                    arg_values.push(self.eval(arg)?);
                }
                self.apply_closure(&closure, arg_values)
            }
        }
    }

    fn eval_while(&mut self, cond: ExprId, body: ExprId) -> EvalResult {
        let mut iterations: u64 = 0;
        loop {
            match self.eval(cond)? {
                Value::Bool(true) => {}
                Value::Bool(false) => break,
                other => {
                    return Err(type_mismatch("while condition", "bool", other.type_name()));
                }
            }
            self.eval(body)?;
            iterations = iterations.saturating_add(1);
        }
        tracing::debug!(iterations, "loop exited");
        Ok(Value::Null)
    }

    /// Evaluate `inner` in a fresh child scope, restoring the current
    /// environment afterwards whether or not evaluation failed.
    fn eval_in_child_scope(&mut self, inner: ExprId) -> EvalResult {
        let scope = self.env.child();
        let saved = std::mem::replace(&mut self.env, scope);
        let result = self.eval(inner);
        self.env = saved;
        result
    }

    /// Unbound names read as null.
    #[inline]
    fn lookup(&self, name: Name) -> Value {
        self.env.resolve(name).unwrap_or(Value::Null)
    }

    /// Call a value with already-evaluated arguments.
    pub fn call_value(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        match func {
            Value::Closure(closure) => self.apply_closure(closure, args),
            other => Err(not_callable(other.type_name())),
        }
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    #[inline]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// The current environment. After `run`, this is the global scope.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer handler; empty for stdout.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

#[cfg(test)]
mod tests;
