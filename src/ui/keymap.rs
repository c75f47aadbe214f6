//! Keyboard bindings
//!
//! Keys are translated into [`Action`]s; playback keys become the same
//! [`PlaybackCommand`]s any other caller would use. While the go-to text field
//! has focus no binding applies, so typing digits or a space never moves
//! playback.

use crate::playback::command::PlaybackCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where keystrokes are currently going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Panes,
    TextField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Playback(PlaybackCommand),
    Quit,
    FocusNext,
    FocusPrev,
    ScrollUp,
    ScrollDown,
    OpenGoTo,
    Regenerate,
}

/// Binding for `key`, None when unbound or when a text field has focus
pub fn action_for(key: &KeyEvent, focus: InputFocus) -> Option<Action> {
    if focus == InputFocus::TextField {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('l') if ctrl => Action::Regenerate,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char(' ') => Action::Playback(PlaybackCommand::TogglePlay),
        KeyCode::Right => Action::Playback(PlaybackCommand::StepForward),
        KeyCode::Left => Action::Playback(PlaybackCommand::StepBack),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Playback(PlaybackCommand::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => {
            Action::Playback(PlaybackCommand::Faster)
        }
        KeyCode::Char('-') | KeyCode::Char('[') => Action::Playback(PlaybackCommand::Slower),
        KeyCode::Home => Action::Playback(PlaybackCommand::First),
        KeyCode::End => Action::Playback(PlaybackCommand::Last),
        KeyCode::Char('g') | KeyCode::Char('G') => Action::OpenGoTo,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_playback_bindings() {
        let cases = [
            (KeyCode::Char(' '), PlaybackCommand::TogglePlay),
            (KeyCode::Right, PlaybackCommand::StepForward),
            (KeyCode::Left, PlaybackCommand::StepBack),
            (KeyCode::Char('r'), PlaybackCommand::Reset),
            (KeyCode::Char('R'), PlaybackCommand::Reset),
        ];
        for (code, command) in cases {
            assert_eq!(
                action_for(&key(code), InputFocus::Panes),
                Some(Action::Playback(command))
            );
        }
    }

    #[test]
    fn test_text_field_suppresses_bindings() {
        for code in [KeyCode::Char(' '), KeyCode::Right, KeyCode::Char('r'), KeyCode::Char('q')] {
            assert_eq!(action_for(&key(code), InputFocus::TextField), None);
        }
    }

    #[test]
    fn test_ctrl_bindings() {
        let reload = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&reload, InputFocus::Panes), Some(Action::Regenerate));
        assert_eq!(action_for(&key(KeyCode::Char('l')), InputFocus::Panes), None);
    }
}
