//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::buffer::{BufferError, SourceText, TextBuffer};
use crate::core::evaluator::Evaluator;
use crate::core::state::App;

/// An evaluator that records every input and answers deterministically.
pub struct RecordingEvaluator {
    calls: Mutex<Vec<String>>,
    setups: AtomicUsize,
    evaluated_before_setup: AtomicUsize,
    fixed_reply: Option<String>,
}

impl RecordingEvaluator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            setups: AtomicUsize::new(0),
            evaluated_before_setup: AtomicUsize::new(0),
            fixed_reply: None,
        }
    }

    /// Always answers with `reply`, whatever the input.
    pub fn with_reply(reply: &str) -> Self {
        Self {
            fixed_reply: Some(reply.to_string()),
            ..Self::new()
        }
    }

    /// The reply `new()` gives for a given wrapped input.
    pub fn reply_for(wrapped_source: &str) -> String {
        format!("evaluated: {wrapped_source}")
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn setup_count(&self) -> usize {
        self.setups.load(Ordering::SeqCst)
    }

    pub fn calls_before_first_setup(&self) -> usize {
        self.evaluated_before_setup.load(Ordering::SeqCst)
    }
}

impl Evaluator for RecordingEvaluator {
    fn name(&self) -> &str {
        "recording"
    }

    fn setup(&self) {
        self.setups.fetch_add(1, Ordering::SeqCst);
    }

    fn evaluate(&self, wrapped_source: &str) -> String {
        if self.setup_count() == 0 {
            self.evaluated_before_setup.fetch_add(1, Ordering::SeqCst);
        }
        self.calls.lock().unwrap().push(wrapped_source.to_string());
        match &self.fixed_reply {
            Some(reply) => reply.clone(),
            None => Self::reply_for(wrapped_source),
        }
    }
}

/// A text buffer with settable contents, or none at all.
pub struct StaticBuffer(Option<String>);

impl StaticBuffer {
    pub fn ready(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn uninitialized() -> Self {
        Self(None)
    }

    pub fn set(&mut self, text: &str) {
        self.0 = Some(text.to_string());
    }
}

impl TextBuffer for StaticBuffer {
    fn read_all(&self) -> Result<SourceText, BufferError> {
        self.0
            .as_deref()
            .map(SourceText::from)
            .ok_or(BufferError::Uninitialized)
    }
}

/// Creates an unstarted App backed by a RecordingEvaluator.
pub fn test_app() -> (App, Arc<RecordingEvaluator>) {
    let evaluator = Arc::new(RecordingEvaluator::new());
    let app = App::new(evaluator.clone());
    (app, evaluator)
}
