use std::time::{Duration, Instant};

use crate::error::Result;

/// How long the copy confirmation stays visible.
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

const LABEL_IDLE: &str = "Copy to Clipboard";
const LABEL_COPIED: &str = "Copied!";

/// Destination for copied table text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
///
/// Opened on first use and kept open afterwards: on X11 and Wayland the
/// contents are served by this process and vanish when the handle drops.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Whether the copy confirmation is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
}

/// Transient "copied" confirmation.
///
/// `Idle -> Copied` on a successful copy; reverts to `Idle` once the hold
/// duration has passed since the most recent success.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    hold: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_CONFIRMATION)
    }
}

impl CopyFeedback {
    pub fn new(hold: Duration) -> Self {
        Self {
            copied_at: None,
            hold,
        }
    }

    /// Record a successful copy, restarting the confirmation window.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn state(&self, now: Instant) -> CopyState {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < self.hold => CopyState::Copied,
            _ => CopyState::Idle,
        }
    }

    /// Time left before reverting to `Idle`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.copied_at
            .map(|at| self.hold.saturating_sub(now.saturating_duration_since(at)))
            .unwrap_or(Duration::ZERO)
    }

    /// Button label for the current state.
    pub fn label(&self, now: Instant) -> &'static str {
        match self.state(now) {
            CopyState::Idle => LABEL_IDLE,
            CopyState::Copied => LABEL_COPIED,
        }
    }
}
