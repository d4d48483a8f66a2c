//! Speech capture boundary used for dictating ingredients.
//!
//! The form never talks to a speech engine directly. It is handed a
//! [`SpeechCapture`] and listens to the [`CaptureEvent`]s it emits. Hosts
//! without speech support use [`NoSpeechCapture`]; hosts that run their own
//! speech-to-text engine push results through a [`ChannelCapture`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Errors reported by the capture platform while listening
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The user or the system refused microphone access
    PermissionDenied,
    /// Nothing was heard before the platform gave up
    NoSpeech,
    Other(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "not-allowed"),
            CaptureError::NoSpeech => write!(f, "no-speech"),
            CaptureError::Other(reason) => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Started,
    Ended,
    /// Final transcript segments of one utterance, in order
    Recognized(Vec<String>),
    Error(CaptureError),
}

/// A continuous speech capture session
pub trait SpeechCapture: Send {
    /// Whether the platform can capture speech at all
    fn is_supported(&self) -> bool;

    fn start(&mut self);

    fn stop(&mut self);

    /// Take the event stream. Returns `None` when unsupported or already taken.
    fn subscribe(&mut self) -> Option<UnboundedReceiver<CaptureEvent>>;
}

/// Capture for platforms without speech recognition
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeechCapture;

impl SpeechCapture for NoSpeechCapture {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn subscribe(&mut self) -> Option<UnboundedReceiver<CaptureEvent>> {
        None
    }
}

/// Capture driven by an external speech engine through a [`CaptureFeed`]
pub struct ChannelCapture {
    active: Arc<AtomicBool>,
    tx: UnboundedSender<CaptureEvent>,
    rx: Option<UnboundedReceiver<CaptureEvent>>,
}

/// Sending half handed to the speech engine
#[derive(Clone)]
pub struct CaptureFeed {
    active: Arc<AtomicBool>,
    tx: UnboundedSender<CaptureEvent>,
}

impl ChannelCapture {
    pub fn new() -> (Self, CaptureFeed) {
        let (tx, rx) = unbounded_channel();
        let active = Arc::new(AtomicBool::new(false));
        let feed = CaptureFeed {
            active: Arc::clone(&active),
            tx: tx.clone(),
        };
        (
            ChannelCapture {
                active,
                tx,
                rx: Some(rx),
            },
            feed,
        )
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl SpeechCapture for ChannelCapture {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&mut self) {
        if !self.active.swap(true, Ordering::SeqCst) {
            debug!("Speech capture started");
            let _ = self.tx.send(CaptureEvent::Started);
        }
    }

    fn stop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            debug!("Speech capture stopped");
            let _ = self.tx.send(CaptureEvent::Ended);
        }
    }

    fn subscribe(&mut self) -> Option<UnboundedReceiver<CaptureEvent>> {
        self.rx.take()
    }
}

impl CaptureFeed {
    pub fn is_listening(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Deliver a recognized utterance. Dropped unless capture is running.
    pub fn recognized<I, S>(&self, segments: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.is_listening() {
            return false;
        }
        let segments = segments.into_iter().map(Into::into).collect();
        self.tx.send(CaptureEvent::Recognized(segments)).is_ok()
    }

    /// Report that the platform stopped listening on its own (e.g. after a
    /// silence timeout). Returns false if capture was not running.
    pub fn ended(&self) -> bool {
        if !self.active.swap(false, Ordering::SeqCst) {
            return false;
        }
        debug!("Speech capture ended by the platform");
        self.tx.send(CaptureEvent::Ended).is_ok()
    }

    /// Report a platform error; capture ends afterwards
    pub fn fail(&self, error: CaptureError) {
        let _ = self.tx.send(CaptureEvent::Error(error));
        if self.active.swap(false, Ordering::SeqCst) {
            let _ = self.tx.send(CaptureEvent::Ended);
        }
    }
}
