use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, Serializer};

/// Credentials and routing for API calls made on behalf of a challenge.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestOptions {
    #[serde(serialize_with = "expose_api_key")]
    pub api_key: Secret<String>,
    pub stripe_account: Option<String>,
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            stripe_account: None,
            idempotency_key: None,
        }
    }

    pub fn with_stripe_account(mut self, stripe_account: impl Into<String>) -> Self {
        self.stripe_account = Some(stripe_account.into());
        self
    }
}

fn expose_api_key<S: Serializer>(key: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(key.expose_secret())
}
