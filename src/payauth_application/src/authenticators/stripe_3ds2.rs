use std::sync::Arc;

use async_trait::async_trait;
use payauth_core::{
    AnalyticsReporter, Authenticatable, AuthHost, AuthenticatorError, AuthenticatorKind,
    CorrelationToken, LaunchArgs, LaunchRequest, NextAction, PaymentAuthenticator,
    RequestOptions, ResultCallback, ResultCaller, SessionId, Stripe3ds2Args, ThreeDs2Config,
};

use crate::{authenticators::challenge::ChallengeDriver, challenge_ledger::ChallengeLedger};

/// Authenticator running the challenge through the in-app 3DS2 transaction SDK.
///
/// The launched flow gets the registry's session id so that it can find this
/// registry again, and a fresh SDK transaction id which doubles as the correlation
/// token of the challenge.
pub struct Stripe3ds2Authenticator {
    driver: ChallengeDriver,
    config: ThreeDs2Config,
    enable_logging: bool,
}

impl Stripe3ds2Authenticator {
    pub fn new(
        session_id: SessionId,
        ledger: Arc<ChallengeLedger>,
        analytics: Arc<dyn AnalyticsReporter>,
        config: ThreeDs2Config,
        enable_logging: bool,
    ) -> Self {
        Self {
            driver: ChallengeDriver::new(
                AuthenticatorKind::ThreeDs2Sdk,
                session_id,
                ledger,
                analytics,
            ),
            config,
            enable_logging,
        }
    }
}

#[async_trait]
impl PaymentAuthenticator for Stripe3ds2Authenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::ThreeDs2Sdk
    }

    #[tracing::instrument(
        name = "Stripe3ds2Authenticator::authenticate",
        skip_all,
        fields(session_id = %self.driver.session_id(), object_id = authenticatable.id())
    )]
    async fn authenticate(
        &self,
        host: &dyn AuthHost,
        authenticatable: &Authenticatable,
        request_options: &RequestOptions,
    ) -> Result<(), AuthenticatorError> {
        let Authenticatable::Intent(intent) = authenticatable else {
            return Err(AuthenticatorError::mismatch(self.kind(), authenticatable));
        };
        let Some(NextAction::Use3ds2(data)) = &intent.next_action else {
            return Err(AuthenticatorError::mismatch(self.kind(), authenticatable));
        };

        let args = LaunchArgs::Stripe3ds2Transaction(Stripe3ds2Args {
            sdk_transaction_id: CorrelationToken::new(),
            config: self.config.clone(),
            intent: intent.clone(),
            next_action: data.clone(),
            request_options: request_options.clone(),
            enable_logging: self.enable_logging,
            status_bar_color: host.status_bar_color(),
            session_id: self.driver.session_id(),
        });

        self.driver
            .run(
                host,
                LaunchRequest::new(authenticatable.request_code(), args),
                &intent.client_secret,
                request_options.stripe_account.clone(),
            )
            .await;
        Ok(())
    }

    fn on_new_result_caller(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback) {
        self.driver.attach(caller, callback);
    }

    fn on_caller_invalidated(&self) {
        self.driver.detach();
    }
}
