//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: source code with token highlighting, current line and
//!   executed-line markers
//! - [`structures`]: the elements of the active step; trees go through
//!   [`crate::layout`] onto a canvas ([`tree`])
//! - [`watch`]: step narration and watch variables
//! - [`status`]: status bar with keybindings and playback state
//! - `cells`: text-mode drawing shared by the structure renderers

mod cells;

pub mod source;
pub mod status;
pub mod structures;
pub mod tree;
pub mod watch;

pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use structures::render_structures_pane;
pub use watch::render_watch_pane;
