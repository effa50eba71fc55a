//! Shutdown coordination.
//!
//! A [`Shutdown`] handle fans a single stop event out to every
//! [`ShutdownListener`]. Handles are cheap to clone; once every handle is
//! dropped, pending listeners resolve as if shutdown had been requested.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::lifecycle::signals::wait_for_signal;

/// Why the server is stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT or SIGTERM.
    Signal,
    /// Programmatic trigger, or every handle dropped.
    Requested,
}

#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<ShutdownReason>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// New listener; only events fired after this call are observed.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        self.fire(ShutdownReason::Requested);
    }

    /// Fire on the first OS termination signal.
    pub fn trigger_on_os_signal(&self) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            wait_for_signal().await;
            handle.fire(ShutdownReason::Signal);
        })
    }

    /// Listeners still waiting.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn fire(&self, reason: ShutdownReason) {
        // No listeners is fine: nothing is running yet.
        let _ = self.tx.send(reason);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side handed to the HTTP server.
#[derive(Debug)]
pub struct ShutdownListener {
    rx: broadcast::Receiver<ShutdownReason>,
}

impl ShutdownListener {
    /// Resolve when shutdown fires.
    pub async fn wait(mut self) -> ShutdownReason {
        self.rx.recv().await.unwrap_or(ShutdownReason::Requested)
    }
}
