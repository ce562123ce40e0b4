use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static INTENT_CLIENT_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(pi|seti)_[^_]+_secret_[^_]+$").expect("valid intent client secret pattern")
});

static SOURCE_CLIENT_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^src_client_secret_[A-Za-z0-9]+$").expect("valid source client secret pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientSecretError {
    #[error("Client secret is empty")]
    Empty,
    #[error("Client secret has an unrecognized format")]
    InvalidFormat,
}

/// Client secret of an intent or a source.
///
/// Kept behind [`Secret`] so it never shows up in `Debug` output or logs. It is
/// only exposed when a launch bundle is serialized for the challenge surface.
#[derive(Debug, Clone)]
pub struct ClientSecret(Secret<String>);

impl ClientSecret {
    pub fn parse(value: impl Into<String>) -> Result<Self, ClientSecretError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ClientSecretError::Empty);
        }
        if !INTENT_CLIENT_SECRET.is_match(&value) && !SOURCE_CLIENT_SECRET.is_match(&value) {
            return Err(ClientSecretError::InvalidFormat);
        }
        Ok(Self(Secret::new(value)))
    }
}

impl AsRef<Secret<String>> for ClientSecret {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for ClientSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for ClientSecret {}

impl TryFrom<Secret<String>> for ClientSecret {
    type Error = ClientSecretError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value.expose_secret().clone())
    }
}

impl Serialize for ClientSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for ClientSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
