pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{AnalyticsSettings, AnalyticsSink, BrowserSettings, PaymentAuthSettings, ThreeDs2Settings};
