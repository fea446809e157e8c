//! Blocking terminal input.
//!
//! Two read modes, matching how the session consumes stdin: whole lines for
//! free text (line-buffered, echoed) and single raw keystrokes for commands
//! (raw mode, no echo). Validation and re-prompting live in the session
//! loop; these readers are plain suspension points with no timeout and no
//! cancellation.

use std::io::BufRead;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::{Result, TaskpadError};

/// Source of user input for the session loop.
///
/// Abstracted as a trait so tests can drive the loop with scripted input.
pub trait UserInput {
    /// Block until a full line is submitted; the trailing newline is stripped.
    fn read_line(&mut self) -> Result<String>;

    /// Block until a single printable keystroke is captured, without echo.
    fn read_key(&mut self) -> Result<char>;
}

/// Scoped raw-mode acquisition.
///
/// Raw mode is released in `Drop`, so every exit path out of a key read,
/// including error returns, restores the terminal to cooked mode.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()
            .map_err(|e| TaskpadError::terminal(format!("failed to enable raw mode: {e}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Terminal-backed input reader over stdin.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    /// Create a new terminal input reader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UserInput for TerminalInput {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| TaskpadError::io("reading line from stdin", e))?;
        if bytes == 0 {
            return Err(TaskpadError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn read_key(&mut self) -> Result<char> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            let ev = event::read()
                .map_err(|e| TaskpadError::terminal(format!("failed to read key event: {e}")))?;
            if let Event::Key(key) = ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Modified keys (Ctrl-..., Alt-...) are not command letters.
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    continue;
                }
                if let KeyCode::Char(c) = key.code {
                    return Ok(c);
                }
            }
        }
    }
}
