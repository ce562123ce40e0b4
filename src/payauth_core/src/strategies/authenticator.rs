use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{authenticatable::Authenticatable, request_options::RequestOptions},
    ports::launcher::{AuthHost, ResultCallback, ResultCaller},
};

// ============================================================================
// Authenticator Kinds
// ============================================================================

/// The challenge strategies a registry can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticatorKind {
    /// Nothing to challenge; success is reported straight away.
    NoOp,
    /// In-app challenge driven by the 3DS2 transaction SDK.
    ThreeDs2Sdk,
    /// Challenge rendered by a browser surface that redirects back to the app.
    BrowserRedirect,
}

impl AuthenticatorKind {
    pub const ALL: [AuthenticatorKind; 3] = [
        AuthenticatorKind::NoOp,
        AuthenticatorKind::ThreeDs2Sdk,
        AuthenticatorKind::BrowserRedirect,
    ];
}

impl std::fmt::Display for AuthenticatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthenticatorKind::NoOp => "no_op",
            AuthenticatorKind::ThreeDs2Sdk => "three_ds2_sdk",
            AuthenticatorKind::BrowserRedirect => "browser_redirect",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Authenticator Errors
// ============================================================================

/// Contract violations raised synchronously by an authenticator.
///
/// Challenge failures never surface here; they reach the host through the result
/// callback as a failed outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthenticatorError {
    #[error("{authenticator} authenticator cannot handle {found}")]
    NextActionMismatch {
        authenticator: AuthenticatorKind,
        found: String,
    },
}

impl AuthenticatorError {
    pub fn mismatch(authenticator: AuthenticatorKind, authenticatable: &Authenticatable) -> Self {
        let found = match authenticatable {
            Authenticatable::Source(source) => format!("source `{}`", source.id),
            Authenticatable::Intent(intent) => match intent.next_action_kind() {
                Some(kind) => format!("next action `{kind}`"),
                None => format!("intent `{}` without a next action", intent.id),
            },
        };
        Self::NextActionMismatch {
            authenticator,
            found,
        }
    }
}

// ============================================================================
// Core Authenticator Trait
// ============================================================================

/// Strategy driving one kind of challenge.
///
/// An authenticator never owns the object it authenticates. The outcome of a
/// challenge is delivered out of band, through the callback attached with
/// [`PaymentAuthenticator::on_new_result_caller`].
#[async_trait]
pub trait PaymentAuthenticator: Send + Sync {
    fn kind(&self) -> AuthenticatorKind;

    /// Start the challenge for `authenticatable` and wait until it concludes.
    ///
    /// The future may stay pending for as long as the external surface is open,
    /// including across a detach and re-attach of the host.
    async fn authenticate(
        &self,
        host: &dyn AuthHost,
        authenticatable: &Authenticatable,
        request_options: &RequestOptions,
    ) -> Result<(), AuthenticatorError>;

    /// Attach the channel through which challenge results reach the host.
    ///
    /// Must be called again after every host recreation. Attaching twice replaces
    /// the previous channel.
    fn on_new_result_caller(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback);

    /// Detach the current channel. Results arriving afterwards are dropped.
    fn on_caller_invalidated(&self);
}
