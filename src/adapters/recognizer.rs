//! Line-based recognition source.
//!
//! Stands in for a speech engine on hosts without one: every line typed
//! on stdin is delivered as one recognized utterance.  The reader thread
//! is spawned on the first [`start`](RecognitionSource::start) and lives
//! until its input closes; [`stop`](RecognitionSource::stop) only mutes
//! it, since a blocking read cannot be interrupted.
//!
//! Once the input has closed the source is unavailable: the coordinator is
//! told to stop listening and later starts fail with
//! [`RecognitionError::NoInputDevice`].

use std::io::{BufRead, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::app::ports::RecognitionSource;
use crate::channels::UtteranceSender;
use crate::error::RecognitionError;

type LineInput = Box<dyn BufRead + Send>;

#[derive(Default)]
struct Shared {
    active: AtomicBool,
    closed: AtomicBool,
    sender: Mutex<Option<UtteranceSender>>,
}

pub struct StdinRecognizer {
    shared: Arc<Shared>,
    /// Taken by the reader thread on first start.
    input: Option<LineInput>,
}

impl StdinRecognizer {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(std::io::stdin()))
    }

    /// Read utterances from any line source instead of stdin.
    pub fn from_reader(input: impl BufRead + Send + 'static) -> Self {
        Self {
            shared: Arc::default(),
            input: Some(Box::new(input)),
        }
    }

    /// True once the input has reached end of file or failed.
    pub fn input_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    fn spawn_reader(&mut self, input: LineInput) -> Result<(), RecognitionError> {
        let shared = self.shared.clone();
        std::thread::Builder::new()
            .name("line-recognizer".into())
            .spawn(move || reader_loop(input, &shared))
            .map_err(|e| {
                warn!("Recognizer: cannot spawn reader thread: {e}");
                RecognitionError::EngineUnavailable
            })?;
        Ok(())
    }
}

impl Default for StdinRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn reader_loop(input: LineInput, shared: &Shared) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        let text = line.trim();
        if text.is_empty() || !shared.active.load(Ordering::Acquire) {
            continue;
        }
        if let Ok(guard) = shared.sender.lock() {
            if let Some(sender) = guard.as_ref() {
                sender.send(text);
            }
        }
    }

    warn!("Recognizer: input closed, voice commands unavailable");
    if shared.active.swap(false, Ordering::AcqRel) {
        if let Ok(guard) = shared.sender.lock() {
            if let Some(sender) = guard.as_ref() {
                sender.source_closed();
            }
        }
    }
    shared.closed.store(true, Ordering::Release);
}

impl RecognitionSource for StdinRecognizer {
    fn start(&mut self, sender: UtteranceSender) -> Result<(), RecognitionError> {
        if self.input_closed() {
            return Err(RecognitionError::NoInputDevice);
        }
        {
            let mut slot = self
                .shared
                .sender
                .lock()
                .map_err(|_| RecognitionError::EngineUnavailable)?;
            *slot = Some(sender);
        }
        self.shared.active.store(true, Ordering::Release);
        if let Some(input) = self.input.take() {
            if let Err(e) = self.spawn_reader(input) {
                self.shared.active.store(false, Ordering::Release);
                return Err(e);
            }
        }
        info!("Recognizer: listening");
        Ok(())
    }

    fn stop(&mut self) {
        self.shared.active.store(false, Ordering::Release);
        if let Ok(mut slot) = self.shared.sender.lock() {
            *slot = None;
        }
        info!("Recognizer: muted");
    }
}
