//! Cancellation signal for in-flight aggregations.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Create a connected handle/signal pair.
pub fn cancel_channel() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx: Arc::new(tx) }, CancelSignal { rx })
}

/// Fires the cancellation. Cloning shares the same underlying signal.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if !self.tx.send_replace(true) {
            debug!("Cancellation requested");
        }
    }

    /// Cancel once `delay` has elapsed. Must be called inside a Tokio runtime.
    pub fn cancel_after(&self, delay: Duration) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Deadline of {:?} reached", delay);
            handle.cancel();
        })
    }
}

/// Observes a [`CancelHandle`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that never fires.
    #[cfg(test)]
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation has been requested.
    ///
    /// If every handle is dropped without cancelling, this never resolves.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_fires_signal() {
        let (handle, signal) = cancel_channel();
        assert!(!signal.is_cancelled());

        handle.cancel();

        assert!(signal.is_cancelled());
        signal.cancelled().await;
    }

    #[tokio::test]
    async fn test_cancel_survives_dropped_handle() {
        let (handle, signal) = cancel_channel();
        handle.cancel();
        drop(handle);

        signal.cancelled().await;
    }

    #[tokio::test]
    async fn test_never_does_not_fire() {
        let signal = CancelSignal::never();

        let fired =
            tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;

        assert!(fired.is_err());
        assert!(!signal.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_after_delay() {
        let (handle, signal) = cancel_channel();

        handle.cancel_after(Duration::from_millis(10)).await.unwrap();

        assert!(signal.is_cancelled());
    }
}
