//! Closure application.

use super::Interpreter;
use crate::errors::{duplicate_declaration, recursion_limit_exceeded, wrong_arg_count};
use crate::{ClosureValue, Environment, EvalError, EvalResult, Value};

impl Interpreter<'_> {
    /// Apply a closure to evaluated arguments.
    ///
    /// The body runs in a new scope whose parent is the closure's captured
    /// environment, not the caller's.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(depth = self.call_depth, arity = closure.arity())
    )]
    pub(super) fn apply_closure(&self, closure: &ClosureValue, args: Vec<Value>) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(wrong_arg_count(closure.arity(), args.len()));
        }
        self.check_recursion_limit()?;

        let call_env = closure.env().child();
        for (&param, value) in closure.params().iter().zip(args) {
            if call_env.declare(param, value).is_err() {
                return Err(duplicate_declaration(self.interner.lookup(param)));
            }
        }

        let mut call_interpreter = self.create_function_interpreter(closure, call_env);
        call_interpreter.eval(closure.body())
    }

    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if let Some(max_depth) = self.max_call_depth {
            if self.call_depth >= max_depth {
                return Err(recursion_limit_exceeded(max_depth));
            }
        }
        Ok(())
    }

    /// Child interpreter for one application of `closure`, evaluating over
    /// the callee's arena in `call_env`.
    fn create_function_interpreter(
        &self,
        closure: &ClosureValue,
        call_env: Environment,
    ) -> Interpreter<'_> {
        Interpreter {
            interner: self.interner,
            arena: closure.arena().clone(),
            env: call_env,
            print_handler: self.print_handler.clone(),
            max_call_depth: self.max_call_depth,
            call_depth: self.call_depth + 1,
        }
    }
}
