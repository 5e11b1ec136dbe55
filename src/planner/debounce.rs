//! Debounced actions
//!
//! Used for notice edits: every keystroke re-arms the timer, and only the
//! last scheduled save runs once typing stops. Losing focus flushes the
//! pending save straight away.

use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

type Action = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

pub struct Debouncer {
    delay: Duration,
    pending: Arc<Mutex<Option<Action>>>,
    timer: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending action and restart the timer
    pub fn schedule<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.stop_timer();
        *self.pending.lock() = Some(Box::new(move || -> BoxFuture<'static, ()> {
            Box::pin(action())
        }));

        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let action = pending.lock().take();
            if let Some(action) = action {
                // detached: aborting the timer must not cancel a running save
                tokio::spawn(action());
            }
        }));
    }

    /// Run the pending action now, if any
    pub async fn flush(&mut self) {
        self.stop_timer();
        let action = self.pending.lock().take();
        if let Some(action) = action {
            action().await;
        }
    }

    /// Drop the pending action without running it
    pub fn cancel(&mut self) {
        self.stop_timer();
        self.pending.lock().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
