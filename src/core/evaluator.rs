//! The capability the interpreter is injected through.
//!
//! The core only ever sees `Arc<dyn Evaluator>`, so tests can substitute a
//! recording fake and the TUI never names a concrete interpreter.

/// An external evaluator: a one-time setup call plus a pure `evaluate`.
///
/// `evaluate` must always return a string. Failures inside the interpreter
/// (parse errors, runtime errors) are reported as descriptive text, never as
/// a panic. A panic is treated as fatal by the caller.
pub trait Evaluator: Send + Sync {
    /// Short name shown in the title bar.
    fn name(&self) -> &str;

    /// One-time setup, called before the first `evaluate`. Calling it again
    /// must be harmless.
    fn setup(&self);

    /// Evaluates already-wrapped source text and returns the result or a
    /// diagnostic.
    fn evaluate(&self, wrapped_source: &str) -> String;
}
