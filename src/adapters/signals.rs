//! Process signal adapter.
//!
//! Listens for SIGINT / SIGTERM on a dedicated thread and asks the
//! coordinator to shut down.  A second signal while shutdown is pending
//! is only logged.

use std::io;
use std::thread;

use log::{info, warn};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

use crate::channels::MonitorHandle;

pub struct ShutdownSignals {
    handle: Handle,
    listener: Option<thread::JoinHandle<()>>,
}

impl ShutdownSignals {
    /// Register the handlers and start the listener thread.
    pub fn register(monitor: MonitorHandle) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let handle = signals.handle();
        let listener = thread::Builder::new()
            .name("signal-listener".to_owned())
            .spawn(move || {
                let mut requested = false;
                for signal in signals.forever() {
                    if requested {
                        warn!("Signal {signal} received, shutdown already pending");
                        continue;
                    }
                    info!("Signal {signal} received, shutting down");
                    requested = monitor.shutdown();
                }
            })?;
        Ok(Self {
            handle,
            listener: Some(listener),
        })
    }

    /// Unregister the handlers and join the listener thread.
    pub fn close(mut self) {
        self.handle.close();
        if let Some(listener) = self.listener.take() {
            if listener.join().is_err() {
                warn!("Signal listener thread panicked");
            }
        }
    }
}
