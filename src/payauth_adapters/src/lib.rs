//! Outer-ring adapters: settings, tracing setup, analytics transports and an
//! in-memory launcher for hosts without a real challenge surface.

pub mod analytics;
pub mod config;
pub mod launcher;
pub mod telemetry;

pub use analytics::{
    AnalyticsRecord, AnalyticsStream, ChannelAnalyticsReporter, DisabledAnalyticsReporter,
    RecordingAnalyticsReporter, TracingAnalyticsReporter,
};
pub use config::{AnalyticsSettings, AnalyticsSink, BrowserSettings, PaymentAuthSettings, ThreeDs2Settings};
pub use launcher::RecordingLauncher;
pub use telemetry::init_tracing;
