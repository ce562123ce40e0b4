use std::sync::{Mutex, PoisonError};

use payauth_core::{AnalyticsError, AnalyticsEvent, AnalyticsReporter};

use super::AnalyticsRecord;

/// Keeps every event in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingAnalyticsReporter {
    records: Mutex<Vec<AnalyticsRecord>>,
}

impl RecordingAnalyticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AnalyticsRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.records().into_iter().map(|r| r.event).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.name == name)
            .count()
    }
}

impl AnalyticsReporter for RecordingAnalyticsReporter {
    fn report(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(AnalyticsRecord::now(event));
        Ok(())
    }
}
