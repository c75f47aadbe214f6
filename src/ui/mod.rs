//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: application state, event loop, pane focus, go-to field
//! - **[`keymap`]**: key → action bindings, suppressed while a text field has focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   structures, watch, status bar)
//! - **[`theme`]**: centralized color palette, including the highlight color table
//! - **[`terminal`]**: raw-mode / alternate-screen guard
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`] and call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::playback::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod keymap;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use terminal::{LogMute, TerminalGuard};
