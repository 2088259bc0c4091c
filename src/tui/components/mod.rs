//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing evaluator, run count and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Editor`: The editable source surface
//! - `OutputPane`: Read-only, scrollable output; scroll state lives in
//!   `OutputPaneState` so it survives across frames
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! OutputPane::new(app.output().unwrap_or_default(), &mut tui.output_pane).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── output_pane.rs   (Preformatted output view)
//! └── editor/          (Source editor with cursor and scrolling)
//! ```

pub mod editor;
pub mod output_pane;
mod title_bar;

pub use editor::{Editor, EditorEvent};
pub use output_pane::{OutputPane, OutputPaneState};
pub use title_bar::TitleBar;
