use anyhow::Context;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::io::{self, Stdout};

use crate::app::AppResult;

/// Raw-mode alternate screen owned for the lifetime of the value. Dropping
/// it restores the terminal, including while unwinding from a panic.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn acquire() -> AppResult<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore();
                return Err(err).context("failed to create terminal backend");
            }
        };

        debug!("Terminal session acquired");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

fn restore() {
    if let Err(err) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {err}");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        warn!("Failed to leave alternate screen: {err}");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        debug!("Terminal session released");
    }
}
