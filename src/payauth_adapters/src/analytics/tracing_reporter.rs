use payauth_core::{AnalyticsError, AnalyticsEvent, AnalyticsReporter};

use super::AnalyticsRecord;

/// Writes every event as a JSON payload on the `payauth::analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsReporter;

impl TracingAnalyticsReporter {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsReporter for TracingAnalyticsReporter {
    fn report(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let record = AnalyticsRecord::now(event);
        let payload =
            serde_json::to_string(&record).map_err(|e| AnalyticsError::Emit(e.to_string()))?;

        tracing::info!(
            target: "payauth::analytics",
            event = record.name,
            emitted_at = %record.emitted_at.to_rfc3339(),
            %payload,
        );
        Ok(())
    }
}
