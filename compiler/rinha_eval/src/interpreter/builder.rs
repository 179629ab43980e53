//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use tracing::debug;

use super::Interpreter;
use crate::diagnostics::{CallStack, EvalCounters};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Default limit on nested calls.
///
/// The native stack grows on demand, so this only bounds runaway
/// recursion and memory use.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200_000;

/// Builder for creating Interpreter instances with various configurations.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
    profile: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            env: None,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            profile: false,
        }
    }

    /// Set the initial environment. Defaults to an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` output goes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the call-depth limit; `None` removes it.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Enable the performance counters.
    #[must_use]
    pub fn profile(mut self, enabled: bool) -> Self {
        self.profile = enabled;
        self
    }

    pub fn build(self) -> Interpreter {
        debug!(
            max_call_depth = ?self.max_call_depth,
            profile = self.profile,
            "building interpreter"
        );
        Interpreter {
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
            counters: self.profile.then(EvalCounters::default),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
