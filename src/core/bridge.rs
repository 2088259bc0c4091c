//! # Evaluation Bridge
//!
//! Adapts raw buffer text into the shape the evaluator expects, then
//! delegates. The whole buffer becomes the body of one implicit block:
//!
//! ```text
//! let x = 5; x   →   {let x = 5; x}
//! ```
//!
//! The bridge holds no state, so any number of runs can go through it
//! without interfering with each other.

use log::debug;

use crate::core::buffer::SourceText;
use crate::core::evaluator::Evaluator;

/// Wraps `source` in a single enclosing block. No trimming, no escaping.
pub fn wrap(source: &str) -> String {
    format!("{{{source}}}")
}

/// Evaluates `source` and returns exactly what the evaluator returned.
///
/// A panicking evaluator is not caught here.
pub fn run(evaluator: &dyn Evaluator, source: &SourceText) -> String {
    let wrapped = wrap(source.as_str());
    debug!(
        "Bridge: evaluating {} bytes with '{}'",
        wrapped.len(),
        evaluator.name()
    );
    evaluator.evaluate(&wrapped)
}
