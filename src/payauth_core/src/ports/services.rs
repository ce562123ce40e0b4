use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{next_action::NextActionKind, session_id::SessionId},
    strategies::authenticator::AuthenticatorKind,
};

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Analytics sink is closed")]
    Closed,
    #[error("Failed to emit analytics event: {0}")]
    Emit(String),
}

/// Telemetry emitted by the registry and the authenticators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    AuthenticatorSelected {
        session_id: SessionId,
        authenticator: AuthenticatorKind,
        object: String,
    },
    /// An intent needed a challenge the registry cannot run; it was routed to the
    /// no-op authenticator instead.
    SelectionFallback {
        session_id: SessionId,
        next_action: Option<NextActionKind>,
        object_id: String,
    },
    ChallengeStarted {
        session_id: SessionId,
        authenticator: AuthenticatorKind,
        request_code: u32,
    },
    ChallengeCompleted {
        session_id: SessionId,
        authenticator: AuthenticatorKind,
        outcome: String,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::AuthenticatorSelected { .. } => "payauth.authenticator_selected",
            AnalyticsEvent::SelectionFallback { .. } => "payauth.selection_fallback",
            AnalyticsEvent::ChallengeStarted { .. } => "payauth.challenge_started",
            AnalyticsEvent::ChallengeCompleted { .. } => "payauth.challenge_completed",
        }
    }
}

/// Port trait for the analytics transport.
///
/// Reporting is fire and forget: callers log a failed report and move on.
pub trait AnalyticsReporter: Send + Sync {
    fn report(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}
