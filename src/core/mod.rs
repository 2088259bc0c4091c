//! # Core Application Logic
//!
//! The playground's state and lifecycle. It knows nothing about terminals,
//! widgets, or which interpreter sits behind the evaluator.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (output, phase)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • bridge::run()        │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ Evaluator  │
//!     │  Adapter   │                          │ (injected) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, the controller's state machine
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`bridge`]: Wraps source text and hands it to the evaluator
//! - [`buffer`]: Snapshot type and the read-side contract of the text buffer
//! - [`evaluator`]: The capability interface the interpreter is injected through
//! - [`diagnostics`]: One-time process-wide panic logging hook
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod bridge;
pub mod buffer;
pub mod config;
pub mod diagnostics;
pub mod evaluator;
pub mod state;
