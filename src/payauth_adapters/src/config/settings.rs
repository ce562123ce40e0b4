use std::{collections::HashMap, sync::Arc};

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use payauth_application::AuthenticationComponent;
use payauth_core::{AnalyticsReporter, PaymentAuthConfig, ThreeDs2Config, UiCustomization};
use serde::Deserialize;

use crate::{
    analytics::{
        AnalyticsStream, ChannelAnalyticsReporter, DisabledAnalyticsReporter,
        TracingAnalyticsReporter,
    },
    config::constants::{SETTINGS_FILE_NAME, defaults, env},
};

/// Settings for the payment authentication layer.
///
/// Layered as built-in defaults, then an optional `payauth.toml`, then
/// `PAYAUTH__`-prefixed environment variables with `__` between nested keys, e.g.
/// `PAYAUTH__THREE_DS2__TIMEOUT_MINUTES=10`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentAuthSettings {
    pub enable_logging: bool,
    pub three_ds2: ThreeDs2Settings,
    pub browser: BrowserSettings,
    pub analytics: AnalyticsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThreeDs2Settings {
    pub timeout_minutes: u32,
    #[serde(default)]
    pub ui_customization: UiCustomization,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrowserSettings {
    pub return_url_scheme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    #[serde(default)]
    pub sink: AnalyticsSink,
}

/// Where enabled analytics events go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsSink {
    /// One `tracing` event per analytics event.
    #[default]
    Tracing,
    /// Timestamped records on a channel the embedding host drains.
    Channel,
}

impl Default for PaymentAuthSettings {
    fn default() -> Self {
        Self {
            enable_logging: defaults::ENABLE_LOGGING,
            three_ds2: ThreeDs2Settings {
                timeout_minutes: defaults::THREE_DS2_TIMEOUT_MINUTES,
                ui_customization: UiCustomization::default(),
            },
            browser: BrowserSettings {
                return_url_scheme: defaults::RETURN_URL_SCHEME.to_string(),
            },
            analytics: AnalyticsSettings {
                enabled: defaults::ANALYTICS_ENABLED,
                sink: AnalyticsSink::default(),
            },
        }
    }
}

impl PaymentAuthSettings {
    /// Load settings from `.env`, the settings file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::with_defaults()?
            .add_source(File::with_name(SETTINGS_FILE_NAME).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Defaults overridden by the given variables only. Neither the process
    /// environment nor the settings file is read.
    pub fn from_env_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(Self::environment().source(Some(vars)))
            .build()?
            .try_deserialize()
    }

    /// Defaults overridden by a TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("enable_logging", defaults::ENABLE_LOGGING)?
            .set_default(
                "three_ds2.timeout_minutes",
                i64::from(defaults::THREE_DS2_TIMEOUT_MINUTES),
            )?
            .set_default("browser.return_url_scheme", defaults::RETURN_URL_SCHEME)?
            .set_default("analytics.enabled", defaults::ANALYTICS_ENABLED)?
            .set_default("analytics.sink", defaults::ANALYTICS_SINK)
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .separator(env::ENV_SEPARATOR)
            .try_parsing(true)
    }

    pub fn auth_config(&self) -> PaymentAuthConfig {
        PaymentAuthConfig {
            three_ds2: ThreeDs2Config {
                timeout_minutes: self.three_ds2.timeout_minutes,
                ui_customization: self.three_ds2.ui_customization.clone(),
            },
            return_url_scheme: self.browser.return_url_scheme.clone(),
        }
    }

    /// Reporter matching the `analytics` table. The `channel` sink also returns the
    /// stream its records arrive on.
    pub fn analytics_reporter(&self) -> (Arc<dyn AnalyticsReporter>, Option<AnalyticsStream>) {
        match (self.analytics.enabled, self.analytics.sink) {
            (false, _) => (Arc::new(DisabledAnalyticsReporter), None),
            (true, AnalyticsSink::Tracing) => (Arc::new(TracingAnalyticsReporter::new()), None),
            (true, AnalyticsSink::Channel) => {
                let (reporter, stream) = ChannelAnalyticsReporter::new();
                (Arc::new(reporter), Some(stream))
            }
        }
    }

    pub fn component(&self) -> (AuthenticationComponent, Option<AnalyticsStream>) {
        let (analytics, stream) = self.analytics_reporter();
        (self.component_with(analytics), stream)
    }

    pub fn component_with(&self, analytics: Arc<dyn AnalyticsReporter>) -> AuthenticationComponent {
        AuthenticationComponent::new(self.auth_config(), analytics).with_logging(self.enable_logging)
    }
}
