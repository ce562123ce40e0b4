use std::sync::Arc;

use payauth_core::{
    AnalyticsEvent, AuthHost, Authenticatable, AuthenticatorError, AuthenticatorKind,
    CorrelationToken, PaymentAuthenticator, PaymentAuthenticatorRegistry, PaymentFlowResult,
    RequestOptions, ResultCallback, ResultCaller, SessionId,
};
use thiserror::Error;

use crate::{
    authenticators::{NoOpAuthenticator, Stripe3ds2Authenticator, WebAuthenticator},
    challenge_ledger::ChallengeLedger,
    component::AuthenticationComponent,
    registry_cache::RegistryCache,
    selector::{self, Selection},
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to assemble authentication dependencies: {0}")]
    Construction(String),
    #[error("No pending challenge for correlation token {0}")]
    ChallengeNotFound(CorrelationToken),
}

/// Owner of the authenticators of one authentication session.
///
/// Built only through [`DefaultAuthenticatorRegistry::create_instance`], which
/// assigns the session id and registers the registry in a [`RegistryCache`] so a
/// recreated host can find it again.
pub struct DefaultAuthenticatorRegistry {
    session_id: SessionId,
    no_op: Arc<NoOpAuthenticator>,
    three_ds2: Arc<Stripe3ds2Authenticator>,
    web: Arc<WebAuthenticator>,
    ledger: Arc<ChallengeLedger>,
    component: AuthenticationComponent,
}

impl std::fmt::Debug for DefaultAuthenticatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultAuthenticatorRegistry")
            .field("session_id", &self.session_id)
            .field("pending_challenges", &self.ledger.pending_count())
            .finish_non_exhaustive()
    }
}

impl DefaultAuthenticatorRegistry {
    /// Build a registry from `component` and register it in `cache`.
    ///
    /// A component that fails validation is rejected before a session id is taken,
    /// and nothing is registered.
    #[tracing::instrument(name = "DefaultAuthenticatorRegistry::create_instance", skip_all)]
    pub fn create_instance(
        component: AuthenticationComponent,
        cache: &RegistryCache,
    ) -> Result<Arc<Self>, RegistryError> {
        component.validate().map_err(RegistryError::Construction)?;

        let session_id = cache.next_session_id();
        let ledger = Arc::new(ChallengeLedger::new());
        let analytics = Arc::clone(&component.analytics);

        let registry = Arc::new(Self {
            session_id,
            no_op: Arc::new(NoOpAuthenticator::new(
                session_id,
                Arc::clone(&ledger),
                Arc::clone(&analytics),
            )),
            three_ds2: Arc::new(Stripe3ds2Authenticator::new(
                session_id,
                Arc::clone(&ledger),
                Arc::clone(&analytics),
                component.config.three_ds2.clone(),
                component.enable_logging,
            )),
            web: Arc::new(WebAuthenticator::new(
                session_id,
                Arc::clone(&ledger),
                analytics,
                component.config.clone(),
                component.enable_logging,
                Arc::clone(&component.three_ds1_return_urls),
            )),
            ledger,
            component,
        });

        cache.register(&registry);
        tracing::debug!(%session_id, "Created authenticator registry");
        Ok(registry)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn authenticator(&self, kind: AuthenticatorKind) -> Arc<dyn PaymentAuthenticator> {
        match kind {
            AuthenticatorKind::NoOp => Arc::clone(&self.no_op) as Arc<dyn PaymentAuthenticator>,
            AuthenticatorKind::ThreeDs2Sdk => Arc::clone(&self.three_ds2) as _,
            AuthenticatorKind::BrowserRedirect => Arc::clone(&self.web) as _,
        }
    }

    fn authenticators(&self) -> [Arc<dyn PaymentAuthenticator>; 3] {
        AuthenticatorKind::ALL.map(|kind| self.authenticator(kind))
    }

    /// Selection for `authenticatable`, with its telemetry reported.
    pub fn select(&self, authenticatable: &Authenticatable) -> Selection {
        let selection = selector::select(authenticatable);

        if let Some(reason) = selection.fallback {
            tracing::warn!(
                session_id = %self.session_id,
                object_id = authenticatable.id(),
                next_action = ?reason.next_action(),
                "No authenticator for the required challenge, treating it as satisfied"
            );
            self.report(AnalyticsEvent::SelectionFallback {
                session_id: self.session_id,
                next_action: reason.next_action(),
                object_id: authenticatable.id().to_string(),
            });
        }

        self.report(AnalyticsEvent::AuthenticatorSelected {
            session_id: self.session_id,
            authenticator: selection.kind,
            object: authenticatable.object_name().to_string(),
        });

        selection
    }

    /// Select the authenticator for `authenticatable` and run its challenge.
    pub async fn authenticate(
        &self,
        host: &dyn AuthHost,
        authenticatable: &Authenticatable,
        request_options: &RequestOptions,
    ) -> Result<(), AuthenticatorError> {
        self.get_authenticator(authenticatable)
            .authenticate(host, authenticatable, request_options)
            .await
    }

    /// Route a returning challenge result to the authenticator waiting on `token`.
    #[tracing::instrument(
        name = "DefaultAuthenticatorRegistry::complete_challenge",
        skip(self, result),
        fields(session_id = %self.session_id)
    )]
    pub fn complete_challenge(
        &self,
        token: &CorrelationToken,
        result: PaymentFlowResult,
    ) -> Result<(), RegistryError> {
        let result = result.with_correlation_token(token.clone());
        if self.ledger.resolve(token, result) {
            Ok(())
        } else {
            Err(RegistryError::ChallengeNotFound(token.clone()))
        }
    }

    pub fn pending_challenges(&self) -> usize {
        self.ledger.pending_count()
    }

    pub fn component(&self) -> &AuthenticationComponent {
        &self.component
    }

    fn report(&self, event: AnalyticsEvent) {
        if let Err(e) = self.component.analytics.report(event) {
            tracing::debug!(error = %e, "Dropped analytics event");
        }
    }
}

impl PaymentAuthenticatorRegistry for DefaultAuthenticatorRegistry {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    fn get_authenticator(&self, authenticatable: &Authenticatable) -> Arc<dyn PaymentAuthenticator> {
        self.authenticator(self.select(authenticatable).kind)
    }

    fn on_new_result_caller(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback) {
        for authenticator in self.authenticators() {
            authenticator.on_new_result_caller(Arc::clone(&caller), Arc::clone(&callback));
        }
    }

    fn on_caller_invalidated(&self) {
        for authenticator in self.authenticators() {
            authenticator.on_caller_invalidated();
        }
    }
}
