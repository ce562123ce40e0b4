use payauth_core::{AnalyticsError, AnalyticsEvent, AnalyticsReporter};
use tokio::sync::mpsc;

use super::{AnalyticsRecord, AnalyticsStream};

/// Hands events to an async consumer, such as a batching uploader task.
#[derive(Debug, Clone)]
pub struct ChannelAnalyticsReporter {
    sender: mpsc::UnboundedSender<AnalyticsRecord>,
}

impl ChannelAnalyticsReporter {
    pub fn new() -> (Self, AnalyticsStream) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl AnalyticsReporter for ChannelAnalyticsReporter {
    fn report(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.sender
            .send(AnalyticsRecord::now(event))
            .map_err(|_| AnalyticsError::Closed)
    }
}
