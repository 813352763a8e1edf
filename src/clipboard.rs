use std::time::{Duration, Instant};

pub use crate::error::{Error, Result};

/// How long the "copied" acknowledgment stays up unless configured otherwise.
pub const DEFAULT_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

pub trait Clipboard {
    /// Replaces the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the desktop session.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<SystemClipboard> {
        Ok(SystemClipboard {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// A short lived "copied" flag for the front end to show after a copy.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    window: Duration,
    copied_at: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_WINDOW)
    }
}

impl CopyFeedback {
    pub fn new(window: Duration) -> CopyFeedback {
        CopyFeedback {
            window,
            copied_at: None,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < self.window,
            None => false,
        }
    }

    /// When the flag goes down again, if it is up at all.
    pub fn expires_at(&self) -> Option<Instant> {
        self.copied_at.map(|at| at + self.window)
    }
}

/// Puts `password` on the clipboard and raises the acknowledgment.
///
/// There is nothing to copy for an empty password, that returns `Ok(false)` and leaves the
/// clipboard alone. The acknowledgment is raised even when the write fails, the error is
/// handed back for the caller to report.
pub fn copy_password<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    password: &str,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> Result<bool> {
    if password.is_empty() {
        return Ok(false);
    }

    let written = clipboard.set_text(password);
    feedback.mark(now);
    written.map(|()| true)
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod clipboard;
