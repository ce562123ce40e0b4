pub mod env {
    pub const ENV_PREFIX: &str = "PAYAUTH";
    pub const ENV_SEPARATOR: &str = "__";
}

/// Base name of the optional settings file, looked up as `payauth.toml` or
/// `payauth.json` in the working directory.
pub const SETTINGS_FILE_NAME: &str = "payauth";

pub mod defaults {
    pub const ENABLE_LOGGING: bool = false;
    pub const THREE_DS2_TIMEOUT_MINUTES: u32 = 5;
    pub const RETURN_URL_SCHEME: &str = "payauth";
    pub const ANALYTICS_ENABLED: bool = true;
    pub const ANALYTICS_SINK: &str = "tracing";
    pub const LOG_FILTER: &str = "info";
}
