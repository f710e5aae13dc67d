//! Cover text shown while the game is hidden, and the fake package install
//! printed on a panic exit.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const HEADER: &str = "[RUNNING] async-stack-tracer v1.0.4 - memory heap visualization";

pub const SUSPENDED_LINES: [&str; 4] = [
    "[INFO] Trace stack suspended at 0x00A4. Waiting for incoming stream...",
    "[DEBUG] Listening on port 127.0.0.1:52312...",
    "[WARN] Incoming frames dropped: 0",
    "[INFO] Press Enter to resume.",
];

const INSTALL_STEPS: [&str; 3] = [
    "Resolving dependencies...",
    "Downloading package async-stack-tracer...",
    "Preparing installation environment...",
];

const PROGRESS_STEPS: u32 = 30;

/// Pacing of the install sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallSequence {
    pub step_delay: Duration,
    pub progress_duration: Duration,
    pub final_delay: Duration,
}

impl Default for InstallSequence {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(250),
            progress_duration: Duration::from_millis(1500),
            final_delay: Duration::from_millis(400),
        }
    }
}

impl InstallSequence {
    /// Same output with no pauses.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            progress_duration: Duration::ZERO,
            final_delay: Duration::ZERO,
        }
    }

    fn pause(duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    /// Writes the status lines, a redrawn progress bar and the closing line.
    /// The terminal must already be back in cooked mode.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for step in INSTALL_STEPS {
            writeln!(out, "{step}")?;
            out.flush()?;
            Self::pause(self.step_delay);
        }

        let tick = self.progress_duration / PROGRESS_STEPS;
        for i in 0..=PROGRESS_STEPS {
            write!(out, "{}\r", progress_line(i))?;
            out.flush()?;
            Self::pause(tick);
        }
        writeln!(out)?;

        writeln!(out, "Installation complete. Exiting...")?;
        out.flush()?;
        Self::pause(self.final_delay);
        Ok(())
    }
}

/// `[####      ] NN%` for step `i` of the progress bar.
#[must_use]
pub fn progress_line(i: u32) -> String {
    let i = i.min(PROGRESS_STEPS);
    let pct = i * 100 / PROGRESS_STEPS;
    let filled = "#".repeat(i as usize);
    format!("[{filled:<width$}] {pct}%", width = PROGRESS_STEPS as usize)
}
