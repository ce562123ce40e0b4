use serde::{Deserialize, Serialize};

pub const MIN_THREE_DS2_TIMEOUT_MINUTES: u32 = 5;
pub const MAX_THREE_DS2_TIMEOUT_MINUTES: u32 = 99;

/// Look of the 3DS2 challenge screens. Passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCustomization {
    pub accent_color: Option<String>,
    pub toolbar_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDs2Config {
    pub timeout_minutes: u32,
    #[serde(default)]
    pub ui_customization: UiCustomization,
}

impl Default for ThreeDs2Config {
    fn default() -> Self {
        Self {
            timeout_minutes: MIN_THREE_DS2_TIMEOUT_MINUTES,
            ui_customization: UiCustomization::default(),
        }
    }
}

/// Authentication settings shared by every authenticator of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAuthConfig {
    pub three_ds2: ThreeDs2Config,
    /// Scheme of the return URL used when a redirect carries none of its own.
    pub return_url_scheme: String,
}

impl Default for PaymentAuthConfig {
    fn default() -> Self {
        Self {
            three_ds2: ThreeDs2Config::default(),
            return_url_scheme: "payauth".to_string(),
        }
    }
}

impl PaymentAuthConfig {
    pub fn validate(&self) -> Result<(), String> {
        let timeout = self.three_ds2.timeout_minutes;
        if !(MIN_THREE_DS2_TIMEOUT_MINUTES..=MAX_THREE_DS2_TIMEOUT_MINUTES).contains(&timeout) {
            return Err(format!(
                "3DS2 timeout must be between {MIN_THREE_DS2_TIMEOUT_MINUTES} and \
                 {MAX_THREE_DS2_TIMEOUT_MINUTES} minutes, got {timeout}"
            ));
        }
        if self.return_url_scheme.trim().is_empty() {
            return Err("return URL scheme must not be empty".to_string());
        }
        Ok(())
    }

    /// Default return URL for a browser challenge.
    pub fn default_return_url(&self, object_id: &str) -> String {
        format!("{}://payment_auth/{}", self.return_url_scheme, object_id)
    }
}
