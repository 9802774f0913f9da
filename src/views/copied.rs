//! "Copied!" indicator with a cancellable reset

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

/// How long the indicator stays on after a copy
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

/// Flag that switches itself off [`COPIED_RESET_DELAY`] after each trigger.
///
/// The flag stores the generation of the trigger that set it (0 = off). A reset
/// task only clears the flag if it still holds its own generation, so a reset
/// racing with a newer trigger is harmless.
#[derive(Debug, Default)]
pub struct CopiedIndicator {
    active: Arc<AtomicU64>,
    generation: u64,
    reset: Option<JoinHandle<()>>,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) != 0
    }

    /// Turn the indicator on and (re)start the reset window
    pub fn trigger(&mut self) {
        self.cancel();
        self.generation = self.generation.wrapping_add(1).max(1);
        let generation = self.generation;
        self.active.store(generation, Ordering::Release);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime, copied indicator will not reset");
            return;
        };
        let active = Arc::clone(&self.active);
        self.reset = Some(handle.spawn(async move {
            tokio::time::sleep(COPIED_RESET_DELAY).await;
            let _ = active.compare_exchange(generation, 0, Ordering::AcqRel, Ordering::Acquire);
        }));
    }

    /// Abort the pending reset, if any; the flag keeps its current value
    pub fn cancel(&mut self) {
        if let Some(handle) = self.reset.take() {
            handle.abort();
        }
    }

    /// Switch off immediately
    pub fn clear(&mut self) {
        self.cancel();
        self.active.store(0, Ordering::Release);
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CopiedIndicator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_resets_after_delay() {
        let mut indicator = CopiedIndicator::new();
        indicator.trigger();
        assert!(indicator.is_active());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(indicator.is_active());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!indicator.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_window() {
        let mut indicator = CopiedIndicator::new();
        indicator.trigger();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        indicator.trigger();

        // the first window would have ended here
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(indicator.is_active());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!indicator.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_reset() {
        let mut indicator = CopiedIndicator::new();
        indicator.trigger();
        let flag = Arc::clone(&indicator.active);
        drop(indicator);

        tokio::time::sleep(Duration::from_secs(3)).await;
        // the aborted task never cleared the shared flag
        assert_ne!(flag.load(Ordering::Acquire), 0);
    }

    #[test]
    fn test_trigger_without_runtime_stays_on() {
        let mut indicator = CopiedIndicator::new();
        indicator.trigger();
        assert!(indicator.is_active());
        assert!(!indicator.has_pending_reset());
        indicator.clear();
        assert!(!indicator.is_active());
    }
}
