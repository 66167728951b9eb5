//! Widgets for the callview TUI.
//!
//! All widgets here are presentational: props in, cells out. State lives in
//! [`crate::app::App`].

mod controls;
mod conversation;
mod status_panel;

pub use controls::ControlsBar;
pub use conversation::{conversation_lines, line_count, ConversationView, EMPTY_PLACEHOLDER};
pub use status_panel::StatusPanel;
