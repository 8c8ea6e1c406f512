use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

/// Drops repeated activations while one is still pending.
///
/// The flag belongs to this instance only. A call that arrives while another is in
/// flight is ignored: nothing is queued and the caller gets `None`.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    busy: AtomicBool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run `action` unless another run is pending.
    ///
    /// The flag is released once the action finishes, whatever its output, so a
    /// failed submission can be retried right away.
    pub async fn run<F, Fut>(&self, action: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submission already in flight, ignoring activation");
            return None;
        }

        let _release = Release(&self.busy);
        Some(action().await)
    }

    /// Force-clear the flag, even with a run still pending
    pub fn reset(&self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Clears the flag when the run completes, panics or is cancelled
struct Release<'a>(&'a AtomicBool);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
