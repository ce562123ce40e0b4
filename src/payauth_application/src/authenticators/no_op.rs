use std::sync::Arc;

use async_trait::async_trait;
use payauth_core::{
    AnalyticsReporter, Authenticatable, AuthHost, AuthenticatorError, AuthenticatorKind,
    PaymentAuthenticator, PaymentFlowResult, RequestOptions, ResultCallback, ResultCaller,
    SessionId,
};

use crate::{authenticators::challenge::ChallengeDriver, challenge_ledger::ChallengeLedger};

/// Authenticator for objects that need no challenge: reports success right away,
/// without launching anything.
pub struct NoOpAuthenticator {
    driver: ChallengeDriver,
}

impl NoOpAuthenticator {
    pub fn new(
        session_id: SessionId,
        ledger: Arc<ChallengeLedger>,
        analytics: Arc<dyn AnalyticsReporter>,
    ) -> Self {
        Self {
            driver: ChallengeDriver::new(AuthenticatorKind::NoOp, session_id, ledger, analytics),
        }
    }
}

#[async_trait]
impl PaymentAuthenticator for NoOpAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::NoOp
    }

    #[tracing::instrument(
        name = "NoOpAuthenticator::authenticate",
        skip_all,
        fields(session_id = %self.driver.session_id(), object_id = authenticatable.id())
    )]
    async fn authenticate(
        &self,
        _host: &dyn AuthHost,
        authenticatable: &Authenticatable,
        request_options: &RequestOptions,
    ) -> Result<(), AuthenticatorError> {
        let mut result = PaymentFlowResult::completed(authenticatable.client_secret().clone())
            .with_stripe_account(request_options.stripe_account.clone());
        if let Authenticatable::Source(source) = authenticatable {
            result = result.with_source_id(source.id.clone());
        }
        self.driver.finish(result);
        Ok(())
    }

    fn on_new_result_caller(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback) {
        self.driver.attach(caller, callback);
    }

    fn on_caller_invalidated(&self) {
        self.driver.detach();
    }
}
