use serde::{Deserialize, Serialize};

use crate::domain::{client_secret::ClientSecret, correlation_token::CorrelationToken};

/// How a challenge ended, as seen by the host.
///
/// Every failure mode of the external surface (denied, network error, launch
/// failure) is folded into [`FlowOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlowOutcome {
    Completed,
    Canceled,
    TimedOut,
    Failed { reason: String },
}

impl FlowOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        FlowOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowOutcome::Completed => "completed",
            FlowOutcome::Canceled => "canceled",
            FlowOutcome::TimedOut => "timed_out",
            FlowOutcome::Failed { .. } => "failed",
        }
    }
}

/// Unvalidated result of a challenge flow, delivered to the host's result callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFlowResult {
    pub client_secret: Option<ClientSecret>,
    pub outcome: FlowOutcome,
    pub correlation_token: Option<CorrelationToken>,
    pub source_id: Option<String>,
    pub stripe_account_id: Option<String>,
}

impl PaymentFlowResult {
    pub fn new(client_secret: Option<ClientSecret>, outcome: FlowOutcome) -> Self {
        Self {
            client_secret,
            outcome,
            correlation_token: None,
            source_id: None,
            stripe_account_id: None,
        }
    }

    pub fn completed(client_secret: ClientSecret) -> Self {
        Self::new(Some(client_secret), FlowOutcome::Completed)
    }

    pub fn with_correlation_token(mut self, token: CorrelationToken) -> Self {
        self.correlation_token = Some(token);
        self
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    pub fn with_stripe_account(mut self, stripe_account_id: Option<String>) -> Self {
        self.stripe_account_id = stripe_account_id;
        self
    }
}
