//! Tree-walking interpreter.
//!
//! `evaluate` walks a [`Term`] in an [`Environment`] and produces a
//! [`Value`] or an [`EvalError`]. There is no local recovery: the first
//! error unwinds the whole evaluation.

mod builder;

use std::sync::Arc;

use rinha_ir::{File, Location, Term, TermKind};
use tracing::{debug, trace};

use crate::diagnostics::{CallFrame, CallStack, EvalCounters};
use crate::errors::{
    expected_tuple, not_callable, undefined_variable, wrong_function_args, EvalNote, EvalResult,
};
use crate::value::Closure;
use crate::{evaluate_binary, Environment, SharedPrintHandler, Value};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// Tree-walking interpreter.
pub struct Interpreter {
    /// Environment `run` evaluates the program in.
    env: Environment,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
    counters: Option<EvalCounters>,
}

impl Interpreter {
    /// Interpreter with an empty environment printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Evaluate a file's root expression in the interpreter's environment.
    pub fn run(&mut self, file: &File) -> EvalResult {
        debug!(file = %file.name, "evaluating");
        let env = self.env.clone();
        let result = self.evaluate(&file.expression, &env);
        self.print_handler.flush();
        match &result {
            Ok(value) => debug!(result = %value, "evaluation finished"),
            Err(err) => debug!(error = %err, "evaluation failed"),
        }
        result
    }

    /// Evaluate a term in `env`.
    pub fn evaluate(&mut self, term: &Term, env: &Environment) -> EvalResult {
        rinha_stack::ensure_sufficient_stack(|| self.eval_inner(term, env))
    }

    fn eval_inner(&mut self, term: &Term, env: &Environment) -> EvalResult {
        // `let` bodies and `if` branches continue in the same environment,
        // so they loop instead of recursing.
        let mut term = term;
        loop {
            if let Some(counters) = &mut self.counters {
                counters.count_term();
            }

            return match &term.kind {
                TermKind::Int(n) => Ok(Value::Int(n.clone())),
                TermKind::Str(s) => Ok(Value::string(Arc::clone(s))),
                TermKind::Bool(b) => Ok(Value::Bool(*b)),
                TermKind::Var(name) => env
                    .lookup(name)
                    .ok_or_else(|| undefined_variable(name).with_location(term.location.clone())),
                TermKind::Let { name, value, next } => {
                    let value = self.evaluate(value, env)?;
                    env.bind(Arc::clone(&name.text), value);
                    term = &**next;
                    continue;
                }
                TermKind::If {
                    condition,
                    then,
                    otherwise,
                } => {
                    let condition = self.evaluate(condition, env)?;
                    term = if condition.is_truthy() {
                        &**then
                    } else {
                        &**otherwise
                    };
                    continue;
                }
                TermKind::Binary { op, lhs, rhs } => {
                    let left = self.evaluate(lhs, env)?;
                    let right = self.evaluate(rhs, env)?;
                    evaluate_binary(left, right, *op)
                        .map_err(|e| e.with_location(term.location.clone()))
                }
                TermKind::Print(value) => {
                    let value = self.evaluate(value, env)?;
                    self.print_handler.println(&value.to_string());
                    Ok(value)
                }
                TermKind::Tuple { first, second } => {
                    let first = self.evaluate(first, env)?;
                    let second = self.evaluate(second, env)?;
                    Ok(Value::tuple(first, second))
                }
                TermKind::First(value) => match self.evaluate(value, env)? {
                    Value::Tuple(pair) => Ok(pair.0.clone()),
                    other => Err(expected_tuple(&other).with_location(term.location.clone())),
                },
                TermKind::Second(value) => match self.evaluate(value, env)? {
                    Value::Tuple(pair) => Ok(pair.1.clone()),
                    other => Err(expected_tuple(&other).with_location(term.location.clone())),
                },
                TermKind::Function(function) => Ok(Value::closure(
                    Arc::clone(function),
                    env.clone(),
                    term.location.clone(),
                )),
                TermKind::Call { callee, arguments } => {
                    let closure = match self.evaluate(callee, env)? {
                        Value::Closure(closure) => closure,
                        other => {
                            return Err(not_callable(&other).with_location(term.location.clone()))
                        }
                    };
                    let mut args = Vec::with_capacity(arguments.len());
                    for argument in arguments {
                        args.push(self.evaluate(argument, env)?);
                    }
                    self.call(&closure, args, callee_name(callee), &term.location)
                }
            };
        }
    }

    /// Call a closure with evaluated arguments.
    fn call(
        &mut self,
        closure: &Closure,
        args: Vec<Value>,
        name: Arc<str>,
        call_location: &Location,
    ) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(wrong_function_args(closure.arity(), args.len())
                .with_location(call_location.clone())
                .with_note(EvalNote::at(
                    "function defined here",
                    closure.location.clone(),
                )));
        }

        self.call_stack
            .push(CallFrame {
                name,
                call_location: call_location.clone(),
            })
            .map_err(|e| {
                self.call_stack
                    .attach_backtrace(e.with_location(call_location.clone()))
            })?;
        let depth = self.call_stack.depth();
        if let Some(counters) = &mut self.counters {
            counters.count_function_call(depth);
        }
        trace!(depth, at = %call_location, "call");

        let function = &closure.function;
        let child = closure.env.child_with(&function.parameters, args);
        let result = self
            .evaluate(&function.body, &child)
            .map_err(|e| self.call_stack.attach_backtrace(e));
        self.call_stack.pop();
        result
    }

    /// The environment `run` evaluates in.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Profiling counters, if enabled.
    pub fn counters(&self) -> Option<&EvalCounters> {
        self.counters.as_ref()
    }

    /// Number of calls currently in progress.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn callee_name(callee: &Term) -> Arc<str> {
    match &callee.kind {
        TermKind::Var(name) => Arc::clone(name),
        _ => Arc::from("<anonymous>"),
    }
}
