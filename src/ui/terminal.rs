//! Terminal setup and teardown
//!
//! [`TerminalGuard`] puts the terminal into raw mode on the alternate screen
//! and restores it when dropped, also on early return or panic unwinding. The
//! keyboard is only read while a guard is alive.
//!
//! Log records written to stderr would land on top of the alternate screen,
//! so a guard can hold a [`LogMute`] that silences the `log` facade until the
//! terminal is restored.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use log::LevelFilter;
use std::io::{self, Stdout};

/// Turns the `log` facade off and restores the previous level on drop
#[derive(Debug)]
pub struct LogMute {
    previous: LevelFilter,
}

impl LogMute {
    pub fn engage() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        LogMute { previous }
    }
}

impl Drop for LogMute {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal is restored
    _log_mute: Option<LogMute>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// With `mute_logs`, logging is off until the guard is dropped; pass
    /// `false` only when log output goes somewhere other than the terminal.
    pub fn new(mute_logs: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalGuard {
            terminal,
            _log_mute: mute_logs.then(LogMute::engage),
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing useful can be done with errors while tearing down
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_mute_restores_level() {
        log::set_max_level(LevelFilter::Warn);
        {
            let _mute = LogMute::engage();
            assert_eq!(log::max_level(), LevelFilter::Off);
            assert!(!log::log_enabled!(log::Level::Warn));
        }
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
}
