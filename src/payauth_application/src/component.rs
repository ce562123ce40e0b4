use std::sync::Arc;

use dashmap::DashMap;
use payauth_core::{AnalyticsReporter, PaymentAuthConfig};

/// Dependencies a registry needs to build its authenticators.
#[derive(Clone)]
pub struct AuthenticationComponent {
    pub config: PaymentAuthConfig,
    pub enable_logging: bool,
    pub analytics: Arc<dyn AnalyticsReporter>,
    /// Return URLs for 3DS1 challenges, keyed by intent id. Consumed on launch.
    pub three_ds1_return_urls: Arc<DashMap<String, String>>,
}

impl AuthenticationComponent {
    pub fn new(config: PaymentAuthConfig, analytics: Arc<dyn AnalyticsReporter>) -> Self {
        Self {
            config,
            enable_logging: false,
            analytics,
            three_ds1_return_urls: Arc::new(DashMap::new()),
        }
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    pub fn with_three_ds1_return_urls(mut self, urls: Arc<DashMap<String, String>>) -> Self {
        self.three_ds1_return_urls = urls;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        self.config.validate()
    }
}
