//! # Introduction
//!
//! tracescrub plays back a precomputed execution trace of an algorithm: a
//! learner steps forward and backward (or lets it play) while the source line
//! highlight and a drawing of the data structures stay in lock-step.
//!
//! ## Pipeline
//!
//! ```text
//! Generator → StepTrace → PlaybackController → TUI panes
//!                                   │              ├─ syntax::tokenize (source lines)
//!                                   │              └─ layout::layout_tree (tree elements)
//!                                   └─ timer ticks / key presses
//! ```
//!
//! 1. [`trace`]: the immutable step model, display values, the closed set of
//!    renderable elements and the generator contract (with a JSON loader).
//! 2. [`playback`]: the playback state machine with its single owned timer,
//!    the command vocabulary shared by all input sources, and sessions that
//!    regenerate traces.
//! 3. [`syntax`]: ordered-pattern line tokenizer for highlighting.
//! 4. [`layout`]: collision-free layout of heap-indexed binary trees.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod layout;
pub mod playback;
pub mod syntax;
pub mod trace;
pub mod ui;
