//! Main TUI application state and logic

use super::input::{FieldOutcome, GoToField};
use super::keymap::{action_for, Action, InputFocus};
use super::panes::{
    render_source_pane, render_status_bar, render_structures_pane, render_watch_pane,
    SourceRenderData, SourceScrollState, StatusRenderData,
};
use crate::playback::clock::{Clock, SystemClock};
use crate::playback::command::PlaybackCommand;
use crate::playback::session::Session;
use crate::syntax::Dialect;
use crate::trace::generator::TraceGenerator;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Longest wait for input before the loop redraws anyway
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Structures,
    Watch,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> structures -> watch)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Structures,
            FocusedPane::Structures => FocusedPane::Watch,
            FocusedPane::Watch => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Watch,
            FocusedPane::Structures => FocusedPane::Source,
            FocusedPane::Watch => FocusedPane::Structures,
        }
    }
}

/// The main application state
pub struct App<G: TraceGenerator, C: Clock = SystemClock> {
    /// Generator, inputs and playback controller
    pub session: Session<G, C>,

    /// The source code the trace refers to
    pub source_code: String,

    /// Shown in the source pane title
    pub title: Option<String>,

    /// Comment syntax of the source
    pub dialect: Dialect,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: SourceScrollState,
    pub structures_scroll: usize,
    pub watch_scroll: usize,

    /// Open go-to-step field; keyboard bindings are off while it exists
    pub goto_field: Option<GoToField>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<G: TraceGenerator, C: Clock> App<G, C> {
    /// Create a new app around a session and the traced source code
    pub fn new(session: Session<G, C>, source_code: String) -> Self {
        let status_message = match session.last_error() {
            Some(error) => format!("Trace unavailable: {}", error),
            None => String::from("Ready!"),
        };
        App {
            session,
            source_code,
            title: None,
            dialect: Dialect::default(),
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            structures_scroll: 0,
            watch_scroll: 0,
            goto_field: None,
            should_quit: false,
            status_message,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Pick the comment syntax from the trace's `language` field
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.dialect = Dialect::from_language(language);
        self
    }

    /// Where keystrokes currently go
    pub fn input_focus(&self) -> InputFocus {
        if self.goto_field.is_some() {
            InputFocus::TextField
        } else {
            InputFocus::Panes
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until input arrives or the next playback tick is due
            let timeout = self
                .session
                .controller()
                .time_until_tick()
                .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire due playback ticks
    pub fn tick(&mut self) {
        let controller = self.session.controller_mut();
        let was_playing = controller.is_playing();
        if controller.poll() > 0 {
            self.status_message = if controller.is_playing() {
                "Playing...".to_string()
            } else if was_playing {
                "Playback complete".to_string()
            } else {
                self.status_message.clone()
            };
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Right column: Structures (top) | Watch (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let controller = self.session.controller();
        let step = controller.current();
        let executed_lines = controller.executed_lines();

        render_source_pane(
            frame,
            columns[0],
            SourceRenderData {
                source_code: &self.source_code,
                current_line: step.and_then(|s| s.line()),
                executed_lines: &executed_lines,
                dialect: self.dialect,
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_structures_pane(
            frame,
            right_rows[0],
            step.map(|s| s.elements.as_slice()).unwrap_or_default(),
            self.focused_pane == FocusedPane::Structures,
            &mut self.structures_scroll,
        );

        render_watch_pane(
            frame,
            right_rows[1],
            step,
            self.focused_pane == FocusedPane::Watch,
            &mut self.watch_scroll,
        );

        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                current_step: controller.current_step(),
                total_steps: controller.total_steps(),
                speed: controller.speed(),
                state: controller.state(),
                goto_input: self.goto_field.as_ref().map(GoToField::text),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(field) = self.goto_field.as_mut() {
            match field.handle_key(&key) {
                FieldOutcome::Editing => {}
                FieldOutcome::Submit(step) => {
                    self.goto_field = None;
                    // Field is 1-based like the status bar
                    self.apply(PlaybackCommand::GoTo(step.saturating_sub(1)));
                }
                FieldOutcome::Cancel => {
                    self.goto_field = None;
                    self.status_message = "Go to cancelled".to_string();
                }
            }
            return;
        }

        let Some(action) = action_for(&key, self.input_focus()) else {
            return;
        };

        match action {
            Action::Playback(command) => self.apply(command),
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.focused_pane = self.focused_pane.next(),
            Action::FocusPrev => self.focused_pane = self.focused_pane.prev(),
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::OpenGoTo => self.goto_field = Some(GoToField::new()),
            Action::Regenerate => {
                self.session.regenerate();
                self.structures_scroll = 0;
                self.watch_scroll = 0;
                self.status_message = match self.session.last_error() {
                    Some(error) => format!("Trace unavailable: {}", error),
                    None => format!(
                        "Reloaded {} steps",
                        self.session.controller().total_steps()
                    ),
                };
            }
        }
    }

    /// Apply a playback command and describe it in the status bar
    pub fn apply(&mut self, command: PlaybackCommand) {
        let controller = self.session.controller_mut();
        command.apply(controller);
        self.status_message = command.describe(controller);
    }

    fn scroll(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Source => {
                // Scrolling up makes the current line move down visually
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_add_signed(-delta));
                }
            }
            FocusedPane::Structures => {
                self.structures_scroll = self.structures_scroll.saturating_add_signed(delta);
            }
            FocusedPane::Watch => {
                self.watch_scroll = self.watch_scroll.saturating_add_signed(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::clock::ManualClock;
    use crate::trace::generator::{GenerateError, Inputs};
    use crate::trace::{Step, StepTrace};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    type TestGenerator = fn(&Inputs) -> Result<StepTrace, GenerateError>;

    fn three_steps(_: &Inputs) -> Result<StepTrace, GenerateError> {
        Ok(StepTrace::new(
            (1..=3)
                .map(|line_number| Step {
                    line_number,
                    description: Some(format!("at line {}", line_number)),
                    is_complete: line_number == 3,
                    ..Step::default()
                })
                .collect(),
        ))
    }

    fn app() -> (App<TestGenerator, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let session = Session::with_clock(three_steps as TestGenerator, Inputs::new(), clock.clone());
        (
            App::new(session, "a = 1\nb = 2\nprint(a + b)".to_string()),
            clock,
        )
    }

    fn press(app: &mut App<TestGenerator, ManualClock>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_goto_field_swallows_playback_keys() {
        let (mut app, _clock) = app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.input_focus(), InputFocus::TextField);

        // Space would toggle playback outside the field
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.session.controller().is_playing());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_focus(), InputFocus::Panes);
        assert_eq!(app.session.controller().current_step(), 2);
    }

    #[test]
    fn test_tick_reports_completion() {
        let (mut app, clock) = app();
        press(&mut app, KeyCode::Char(' '));
        clock.advance_millis(3000);
        app.tick();
        assert_eq!(app.session.controller().current_step(), 2);
        assert!(!app.session.controller().is_playing());
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_render_shows_step_counter_and_source() {
        let (mut app, _clock) = app();
        press(&mut app, KeyCode::Right);

        let mut terminal = Terminal::new(TestBackend::new(120, 20)).expect("test terminal");
        terminal.draw(|f| app.render(f)).expect("draw");

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Step 2/3"));
        assert!(screen.contains("print"));
        assert!(screen.contains("at line 2"));
    }
}
