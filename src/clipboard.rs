// ABOUTME: Clipboard access for the code viewer's copy action
// The copy acknowledgement flag stays set for a fixed window after a successful copy

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Default time the "Copied!" acknowledgement stays visible
pub const DEFAULT_ACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard.
///
/// The handle is opened lazily and kept alive, since on some platforms the
/// clipboard contents disappear when the owning handle is dropped.
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
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("no clipboard handle".to_string())),
        }
    }
}

/// In-process clipboard for headless runs and tests.
///
/// Clones share the same contents, so a caller can keep a handle after
/// boxing the sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map_or(None, |contents| contents.clone())
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Write("memory clipboard poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Transient "copied" acknowledgement
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
        }
    }

    pub fn arm(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|copied_at| copied_at.elapsed() < self.duration)
    }

    /// Copy button label
    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_ACK_DURATION)
    }
}

/// Write `text` to the sink and arm the acknowledgement on success
pub fn copy_text(
    sink: &mut dyn ClipboardSink,
    text: &str,
    feedback: &mut CopyFeedback,
) -> Result<(), ClipboardError> {
    match sink.set_text(text) {
        Ok(()) => {
            debug!(bytes = text.len(), "Copied text to clipboard");
            feedback.arm();
            Ok(())
        }
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::code::MAIN_LOGIC;

    #[tokio::test(start_paused = true)]
    async fn test_feedback_expires_after_ack_window() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_copied());
        assert_eq!(feedback.label(), "Copy");

        feedback.arm();
        assert!(feedback.is_copied());
        assert_eq!(feedback.label(), "Copied!");

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(feedback.is_copied());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!feedback.is_copied());
        assert_eq!(feedback.label(), "Copy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_writes_exact_text() {
        let mut sink = MockClipboardSink::new();
        sink.expect_set_text()
            .withf(|text: &str| text == MAIN_LOGIC)
            .times(1)
            .returning(|_| Ok(()));

        let mut feedback = CopyFeedback::default();
        copy_text(&mut sink, MAIN_LOGIC, &mut feedback).unwrap();
        assert!(feedback.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_leaves_flag_unset() {
        let mut sink = MockClipboardSink::new();
        sink.expect_set_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        let mut feedback = CopyFeedback::default();
        let err = copy_text(&mut sink, MAIN_LOGIC, &mut feedback).unwrap_err();
        assert_eq!(err, ClipboardError::Unavailable("no display".to_string()));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_memory_clipboard_keeps_last_text() {
        let reader = MemoryClipboard::new();
        let mut writer = reader.clone();
        assert!(reader.contents().is_none());
        writer.set_text("first").unwrap();
        writer.set_text("second").unwrap();
        assert_eq!(reader.contents().as_deref(), Some("second"));
    }
}
