use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    authenticatable::StripeIntent,
    client_secret::ClientSecret,
    config::ThreeDs2Config,
    correlation_token::CorrelationToken,
    flow_result::PaymentFlowResult,
    next_action::Use3ds2Data,
    request_options::RequestOptions,
    session_id::SessionId,
};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No host is available to start the challenge")]
    HostUnavailable,
    #[error("Challenge surface rejected the launch: {0}")]
    Rejected(String),
}

/// Challenge surface a launch request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTarget {
    Stripe3ds2Transaction,
    PaymentBrowserAuth,
}

/// Arguments for the in-app 3DS2 transaction flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stripe3ds2Args {
    pub sdk_transaction_id: CorrelationToken,
    pub config: ThreeDs2Config,
    pub intent: StripeIntent,
    pub next_action: Use3ds2Data,
    pub request_options: RequestOptions,
    pub enable_logging: bool,
    pub status_bar_color: Option<u32>,
    pub session_id: SessionId,
}

/// Arguments for a browser-based challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserAuthArgs {
    pub object_id: String,
    pub request_code: u32,
    pub client_secret: ClientSecret,
    pub url: String,
    pub return_url: String,
    pub correlation_token: CorrelationToken,
    pub session_id: SessionId,
    pub enable_logging: bool,
    pub stripe_account_id: Option<String>,
    pub should_cancel_source: bool,
    pub status_bar_color: Option<u32>,
}

/// Opaque argument bundle handed to the challenge surface.
///
/// It always carries the session id and the correlation token: those two values are
/// all a recreated host needs to route the result back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum LaunchArgs {
    Stripe3ds2Transaction(Stripe3ds2Args),
    PaymentBrowserAuth(BrowserAuthArgs),
}

impl LaunchArgs {
    pub fn target(&self) -> LaunchTarget {
        match self {
            LaunchArgs::Stripe3ds2Transaction(_) => LaunchTarget::Stripe3ds2Transaction,
            LaunchArgs::PaymentBrowserAuth(_) => LaunchTarget::PaymentBrowserAuth,
        }
    }

    pub fn session_id(&self) -> SessionId {
        match self {
            LaunchArgs::Stripe3ds2Transaction(args) => args.session_id,
            LaunchArgs::PaymentBrowserAuth(args) => args.session_id,
        }
    }

    pub fn correlation_token(&self) -> &CorrelationToken {
        match self {
            LaunchArgs::Stripe3ds2Transaction(args) => &args.sdk_transaction_id,
            LaunchArgs::PaymentBrowserAuth(args) => &args.correlation_token,
        }
    }

    pub fn to_bundle(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn from_bundle(bundle: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(bundle)
    }
}

#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub request_code: u32,
    pub args: LaunchArgs,
}

impl LaunchRequest {
    pub fn new(request_code: u32, args: LaunchArgs) -> Self {
        Self { request_code, args }
    }

    pub fn target(&self) -> LaunchTarget {
        self.args.target()
    }
}

/// Callback receiving the outcome of a challenge.
pub type ResultCallback = Arc<dyn Fn(PaymentFlowResult) + Send + Sync>;

/// Port for the host surface that can start a challenge flow.
///
/// Used when no result caller is attached.
pub trait AuthHost: Send + Sync {
    fn start_for_result(&self, request: LaunchRequest) -> Result<(), LaunchError>;

    fn status_bar_color(&self) -> Option<u32> {
        None
    }
}

/// Port for the host's registered launcher, whose results come back through the
/// paired [`ResultCallback`].
pub trait ResultCaller: Send + Sync {
    fn launch(&self, request: LaunchRequest) -> Result<(), LaunchError>;
}
