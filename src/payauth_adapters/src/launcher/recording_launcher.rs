use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
};

use payauth_core::{AuthHost, LaunchError, LaunchRequest, ResultCaller};
use tokio::sync::Notify;

/// In-memory challenge surface.
///
/// Acts as both the host and its result caller. Launch requests are queued so a
/// driver (a test, a demo, a headless checkout) can pick them up, play the
/// challenge and feed the result back through the resume use case.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    queue: Mutex<VecDeque<LaunchRequest>>,
    history: Mutex<Vec<LaunchRequest>>,
    launched: Notify,
    status_bar_color: Option<u32>,
    reject_launches: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every launch fails, like a host already torn down.
    pub fn rejecting() -> Self {
        Self {
            reject_launches: true,
            ..Self::default()
        }
    }

    pub fn with_status_bar_color(mut self, color: u32) -> Self {
        self.status_bar_color = Some(color);
        self
    }

    /// Wait for the next launch request that has not been taken yet.
    pub async fn next_launch(&self) -> LaunchRequest {
        loop {
            let launched = self.launched.notified();
            if let Some(request) = self.lock_queue().pop_front() {
                return request;
            }
            launched.await;
        }
    }

    pub fn try_next_launch(&self) -> Option<LaunchRequest> {
        self.lock_queue().pop_front()
    }

    /// Every request launched so far, taken or not.
    pub fn history(&self) -> Vec<LaunchRequest> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, VecDeque<LaunchRequest>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, request: LaunchRequest) -> Result<(), LaunchError> {
        if self.reject_launches {
            return Err(LaunchError::Rejected(
                "launcher is not accepting challenges".to_string(),
            ));
        }

        tracing::debug!(
            target_surface = ?request.target(),
            request_code = request.request_code,
            "Recorded challenge launch"
        );
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.lock_queue().push_back(request);
        self.launched.notify_one();
        Ok(())
    }
}

impl AuthHost for RecordingLauncher {
    fn start_for_result(&self, request: LaunchRequest) -> Result<(), LaunchError> {
        self.record(request)
    }

    fn status_bar_color(&self) -> Option<u32> {
        self.status_bar_color
    }
}

impl ResultCaller for RecordingLauncher {
    fn launch(&self, request: LaunchRequest) -> Result<(), LaunchError> {
        self.record(request)
    }
}
