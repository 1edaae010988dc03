//! Channel hub standing in for the OS sensor accuracy stream.
//!
//! Producers (a platform shim, scripted playback, tests) push
//! [`AccuracyReading`]s through a cloneable [`SensorReporter`]; the feed owns
//! a dispatch thread that delivers each reading to the attached listener.
//! Attaching is idempotent: registering while the feed is already running is
//! a no-op and never duplicates delivery. The dispatch thread holds only a
//! weak reference to the listener and exits when the listener is dropped.

use crate::sensor::types::AccuracyReading;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::JoinHandle;
use std::time::Duration;

/// Receiver side of the sensor seam; implemented by the accuracy monitor.
pub trait AccuracyListener: Send + Sync {
    /// Called for every reading the sensor service reports, on the feed's
    /// dispatch thread. Deduplication is the listener's concern.
    fn on_sensor_changed(&self, reading: AccuracyReading);
}

/// Errors that can occur operating the sensor feed.
#[derive(Debug)]
pub enum FeedError {
    /// The feed's inbound channel has been closed
    Disconnected,
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Disconnected => write!(f, "Sensor feed is disconnected"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Cloneable handle producers use to push readings into the feed.
#[derive(Debug, Clone)]
pub struct SensorReporter {
    sender: Sender<AccuracyReading>,
}

impl SensorReporter {
    /// Report a new reading. Blocks only if the feed's bounded buffer is full.
    pub fn report(&self, reading: AccuracyReading) -> Result<(), FeedError> {
        self.sender
            .send(reading)
            .map_err(|_| FeedError::Disconnected)
    }
}

/// The sensor accuracy stream hub.
pub struct SensorFeed {
    sender: Sender<AccuracyReading>,
    receiver: Receiver<AccuracyReading>,
    running: Arc<AtomicBool>,
    dispatch: Mutex<Option<JoinHandle<()>>>,
}

impl SensorFeed {
    /// Create a new feed with a bounded reading buffer.
    pub fn new() -> Self {
        let (sender, receiver) = bounded(1024);
        Self {
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(false)),
            dispatch: Mutex::new(None),
        }
    }

    /// Get a reporter handle for producers.
    pub fn reporter(&self) -> SensorReporter {
        SensorReporter {
            sender: self.sender.clone(),
        }
    }

    /// Attach a listener and start dispatching readings to it.
    ///
    /// Idempotent: if a dispatch thread is already running, this is a no-op,
    /// so repeated registration cannot duplicate delivery.
    pub fn attach(&self, listener: Weak<dyn AccuracyListener>) {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::debug!("sensor feed already attached, ignoring");
            return;
        }

        let receiver = self.receiver.clone();
        let running = self.running.clone();
        let handle = std::thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                match receiver.recv_timeout(Duration::from_millis(100)) {
                    Ok(reading) => {
                        let Some(listener) = listener.upgrade() else {
                            break;
                        };
                        listener.on_sensor_changed(reading);
                    }
                    Err(crossbeam_channel::RecvTimeoutError::Timeout) => continue,
                    Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        if let Ok(mut dispatch) = self.dispatch.lock() {
            *dispatch = Some(handle);
        }
    }

    /// Check whether a dispatch thread is running.
    pub fn is_attached(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop dispatching and join the dispatch thread.
    pub fn detach(&self) {
        self.running.store(false, Ordering::SeqCst);
        let handle = self.dispatch.lock().ok().and_then(|mut d| d.take());
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

impl Default for SensorFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SensorFeed {
    fn drop(&mut self) {
        self.detach();
    }
}
