mod channel;
mod recording;
mod tracing_reporter;

use chrono::{DateTime, Utc};
use payauth_core::{AnalyticsEvent, AnalyticsReporter, AnalyticsError};
use serde::Serialize;
use tokio::sync::mpsc;

pub use channel::ChannelAnalyticsReporter;
pub use recording::RecordingAnalyticsReporter;
pub use tracing_reporter::TracingAnalyticsReporter;

/// Receiving end of a [`ChannelAnalyticsReporter`].
pub type AnalyticsStream = mpsc::UnboundedReceiver<AnalyticsRecord>;

/// An analytics event stamped with its emission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsRecord {
    pub name: &'static str,
    pub emitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AnalyticsEvent,
}

impl AnalyticsRecord {
    pub fn now(event: AnalyticsEvent) -> Self {
        Self {
            name: event.name(),
            emitted_at: Utc::now(),
            event,
        }
    }
}

/// Reporter used when analytics are switched off in the settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAnalyticsReporter;

impl AnalyticsReporter for DisabledAnalyticsReporter {
    fn report(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
