//! Go-to-step text field

use crossterm::event::{KeyCode, KeyEvent};

/// Result of feeding one key to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Still editing
    Editing,
    /// Enter with a valid 1-based step number
    Submit(usize),
    Cancel,
}

/// Numeric input for jumping to a step (1-based, as shown in the status bar)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoToField {
    buffer: String,
}

impl GoToField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> FieldOutcome {
        match key.code {
            KeyCode::Esc => FieldOutcome::Cancel,
            KeyCode::Enter => match self.buffer.parse::<usize>() {
                Ok(step) => FieldOutcome::Submit(step),
                Err(_) => FieldOutcome::Cancel,
            },
            KeyCode::Backspace => {
                self.buffer.pop();
                FieldOutcome::Editing
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // usize::MAX has 20 digits; anything longer cannot parse
                if self.buffer.len() < 20 {
                    self.buffer.push(c);
                }
                FieldOutcome::Editing
            }
            _ => FieldOutcome::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submit() {
        let mut field = GoToField::new();
        for c in ['1', 'x', '2'] {
            assert_eq!(field.handle_key(&key(KeyCode::Char(c))), FieldOutcome::Editing);
        }
        assert_eq!(field.text(), "12");
        assert_eq!(field.handle_key(&key(KeyCode::Enter)), FieldOutcome::Submit(12));
    }

    #[test]
    fn test_empty_enter_cancels() {
        let mut field = GoToField::new();
        assert_eq!(field.handle_key(&key(KeyCode::Enter)), FieldOutcome::Cancel);
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut field = GoToField::new();
        field.handle_key(&key(KeyCode::Char('7')));
        field.handle_key(&key(KeyCode::Backspace));
        assert_eq!(field.text(), "");
        assert_eq!(field.handle_key(&key(KeyCode::Esc)), FieldOutcome::Cancel);
    }
}
