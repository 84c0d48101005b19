//! Stack safety for the tree-walking evaluator.
//!
//! Evaluation recurses once per nested expression and once per closure
//! application, so a long `Seq` chain or a deeply recursive program can
//! exhaust the native stack. Every recursive evaluation step is wrapped in
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Native targets**: `stacker` allocates a new stack segment when less
//!   than the red zone remains.
//! - **WASM targets**: passthrough; the call-depth limit in the interpreter
//!   is the only guard there.

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (128KB red zone).
    const RED_ZONE: usize = 128 * 1024;

    /// Stack space to allocate per growth (2MB).
    const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
