//! Stack growth for deep recursion.
//!
//! The evaluator and the tree decoder are plain recursive walks. User
//! programs recurse as deep as they like (naive Fibonacci, mutual recursion,
//! long `let` chains), so every recursive step goes through
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated stack segment whenever the current one runs low.
//!
//! On `wasm32` the call is a passthrough: the runtime manages its own stack.

/// Grow the stack when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn eval(&mut self, term: &Term) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(term))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
