//! # Reference-Model Interpreter
//!
//! The evaluator shipped with the playground. It runs a small subset of Rust
//! (bindings, literals, borrows, dereferences, assignment) over an
//! environment of places and renders the final environment as text:
//!
//! ```text
//! {let a = 1; let mut b; b = &a; let c = *b;}
//!
//! a ↦ 1
//! b ↦ &a
//! c ↦ 1
//! ```
//!
//! The core only sees this through [`Evaluator`], so the interpreter can be
//! swapped without touching the controller.

mod environment;
mod error;
mod model;
mod value;

pub use environment::Environment;
pub use error::EvalError;
pub use model::{Interpreter, Outcome, ReferenceModel};
pub use value::{Place, Value};

use log::debug;

use crate::core::diagnostics;
use crate::core::evaluator::Evaluator;

/// Interprets one wrapped program. Never fails: errors come back as text.
pub fn evaluate(wrapped_source: &str) -> String {
    match ReferenceModel.interpret(wrapped_source) {
        Ok(outcome) => {
            debug!(
                "Evaluation finished with {} bindings",
                outcome.environment.len()
            );
            outcome.to_string()
        }
        Err(e) => {
            debug!("Evaluation failed: {e}");
            format!("error: {e}")
        }
    }
}

/// [`Evaluator`] backed by [`ReferenceModel`].
pub struct ReferenceEvaluator;

impl Evaluator for ReferenceEvaluator {
    fn name(&self) -> &str {
        "reference"
    }

    fn setup(&self) {
        diagnostics::install_diagnostic_hook();
    }

    fn evaluate(&self, wrapped_source: &str) -> String {
        evaluate(wrapped_source)
    }
}
