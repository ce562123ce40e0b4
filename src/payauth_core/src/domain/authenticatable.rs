use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    client_secret::ClientSecret,
    next_action::{NextAction, NextActionKind},
};

/// Request code tagging launches for a payment intent.
pub const PAYMENT_REQUEST_CODE: u32 = 50000;
/// Request code tagging launches for a setup intent.
pub const SETUP_REQUEST_CODE: u32 = 50001;
/// Request code tagging launches for a source.
pub const SOURCE_REQUEST_CODE: u32 = 50002;

#[derive(Debug, Error)]
pub enum AuthenticatableError {
    #[error("No suitable authenticator for object kind `{object}`")]
    Unsupported { object: String },
    #[error("Payment object is missing its `object` tag")]
    MissingObjectTag,
    #[error("Malformed payment object: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    PaymentIntent,
    SetupIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
}

/// A payment or setup intent as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripeIntent {
    pub id: String,
    #[serde(rename = "object")]
    pub kind: IntentKind,
    pub client_secret: ClientSecret,
    pub status: IntentStatus,
    #[serde(default)]
    pub next_action: Option<NextAction>,
}

impl StripeIntent {
    pub fn requires_action(&self) -> bool {
        self.status == IntentStatus::RequiresAction
    }

    pub fn next_action_kind(&self) -> Option<NextActionKind> {
        self.next_action.as_ref().map(NextAction::kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    Redirect,
    Receiver,
    CodeVerification,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRedirect {
    pub url: Option<String>,
    pub return_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub client_secret: ClientSecret,
    pub flow: SourceFlow,
    #[serde(default)]
    pub redirect: Option<SourceRedirect>,
}

impl Source {
    /// The browser URL to send the customer to, if this source needs one.
    pub fn redirect_url(&self) -> Option<&str> {
        if self.flow != SourceFlow::Redirect {
            return None;
        }
        self.redirect.as_ref().and_then(|r| r.url.as_deref())
    }
}

/// A payment object that may need an extra verification step before it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Authenticatable {
    Intent(StripeIntent),
    Source(Source),
}

impl Authenticatable {
    /// Parse an API object by its `object` tag.
    ///
    /// Object kinds that have no selection rule are rejected here with
    /// [`AuthenticatableError::Unsupported`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, AuthenticatableError> {
        let object = value
            .get("object")
            .and_then(serde_json::Value::as_str)
            .ok_or(AuthenticatableError::MissingObjectTag)?
            .to_string();

        match object.as_str() {
            "payment_intent" | "setup_intent" => {
                Ok(Authenticatable::Intent(serde_json::from_value(value)?))
            }
            "source" => Ok(Authenticatable::Source(serde_json::from_value(value)?)),
            _ => Err(AuthenticatableError::Unsupported { object }),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Authenticatable::Intent(intent) => &intent.id,
            Authenticatable::Source(source) => &source.id,
        }
    }

    pub fn client_secret(&self) -> &ClientSecret {
        match self {
            Authenticatable::Intent(intent) => &intent.client_secret,
            Authenticatable::Source(source) => &source.client_secret,
        }
    }

    pub fn request_code(&self) -> u32 {
        match self {
            Authenticatable::Intent(intent) => match intent.kind {
                IntentKind::PaymentIntent => PAYMENT_REQUEST_CODE,
                IntentKind::SetupIntent => SETUP_REQUEST_CODE,
            },
            Authenticatable::Source(_) => SOURCE_REQUEST_CODE,
        }
    }

    pub fn object_name(&self) -> &'static str {
        match self {
            Authenticatable::Intent(intent) => match intent.kind {
                IntentKind::PaymentIntent => "payment_intent",
                IntentKind::SetupIntent => "setup_intent",
            },
            Authenticatable::Source(_) => "source",
        }
    }
}

impl From<StripeIntent> for Authenticatable {
    fn from(intent: StripeIntent) -> Self {
        Authenticatable::Intent(intent)
    }
}

impl From<Source> for Authenticatable {
    fn from(source: Source) -> Self {
        Authenticatable::Source(source)
    }
}
