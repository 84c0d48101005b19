//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use fwjs_ir::{SharedArena, StringInterner};

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: a fresh global environment, output to stdout, and
/// `DEFAULT_MAX_CALL_DEPTH` nested calls.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the initial environment.
    ///
    /// Lets several programs run against one global scope.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the destination of `print`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested closure applications. `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
