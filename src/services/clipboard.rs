//! Clipboard copy with a terminal escape fallback.
//!
//! The primary path talks to the system clipboard through arboard. When no
//! system clipboard is reachable (SSH sessions, bare consoles, missing
//! display server) the service falls back to an OSC 52 escape sequence,
//! which asks the terminal emulator itself to set the clipboard.

use crate::error::ClipboardResult;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::io::Write;

/// Which copy path ended up being used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// System clipboard via arboard
    System,
    /// OSC 52 escape sequence handled by the terminal emulator
    Osc52,
}

impl CopyMethod {
    pub fn description(&self) -> &'static str {
        match self {
            CopyMethod::System => "system clipboard",
            CopyMethod::Osc52 => "terminal clipboard escape",
        }
    }
}

/// Service wrapping the two copy paths.
pub struct ClipboardService {
    // Kept alive for the whole session: on X11 the clipboard content is
    // owned by this handle and vanishes when it is dropped.
    system: Option<arboard::Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self { system: None }
    }

    /// Copy text, preferring the system clipboard and falling back to the
    /// OSC 52 escape. Returns the path that succeeded.
    pub fn copy(&mut self, text: &str) -> ClipboardResult<CopyMethod> {
        match self.system_copy(text) {
            Ok(()) => Ok(CopyMethod::System),
            Err(e) => {
                tracing::warn!("System clipboard write failed, using OSC 52: {}", e);
                self.osc52_copy(text)?;
                Ok(CopyMethod::Osc52)
            }
        }
    }

    fn system_copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match &mut self.system {
            Some(c) => c,
            None => self.system.insert(arboard::Clipboard::new()?),
        };
        clipboard.set_text(text.to_string())
    }

    fn osc52_copy(&self, text: &str) -> Result<(), std::io::Error> {
        let mut stdout = std::io::stdout();
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the OSC 52 set-clipboard sequence for the given text
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}
