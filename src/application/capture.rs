use crate::application::dispatch::Dispatcher;
use crate::application::gesture::GestureDetector;
use crate::domain::traits::ClipboardSource;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Replace Windows line breaks so multi-line selections read as one sentence
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", " ")
}

/// Turns raw hotkey presses into captured clipboard text
pub struct CaptureLoop<C: ClipboardSource> {
    presses: mpsc::UnboundedReceiver<Instant>,
    detector: GestureDetector,
    clipboard: C,
}

impl<C: ClipboardSource> CaptureLoop<C> {
    pub fn new(
        presses: mpsc::UnboundedReceiver<Instant>,
        detector: GestureDetector,
        clipboard: C,
    ) -> Self {
        Self {
            presses,
            detector,
            clipboard,
        }
    }

    /// Wait for the next completed gesture and return the normalized
    /// clipboard text. None once the key source has shut down.
    pub async fn next_capture(&mut self) -> Option<String> {
        while let Some(at) = self.presses.recv().await {
            let complete = self.detector.press(at);
            debug!("Hotkey press {}", self.detector.count());
            if complete {
                let text = self.clipboard.read_text();
                debug!("Gesture complete, captured {} chars", text.chars().count());
                return Some(normalize(&text));
            }
        }
        None
    }

    /// Drop presses that queued up while a translation was in flight
    pub fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.presses.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            debug!("Dropped {} hotkey presses received during translation", dropped);
        }
        self.detector.reset();
        dropped
    }
}

/// Capture → translate, one gesture at a time, until the key source closes
pub async fn run<C: ClipboardSource>(mut capture: CaptureLoop<C>, dispatcher: Dispatcher) {
    while let Some(text) = capture.next_capture().await {
        dispatcher.dispatch(&text).await;
        capture.discard_pending();
    }
    error!("Hotkey source closed, capture loop stopped");
}
