use std::sync::Arc;

use payauth_core::{
    AnalyticsEvent, AnalyticsReporter, AuthHost, AuthenticatorKind, ClientSecret,
    CorrelationToken, FlowOutcome, LaunchRequest, PaymentFlowResult, ResultCallback,
    ResultCaller, SessionId,
};

use crate::{challenge_ledger::ChallengeLedger, result_channel::ResultChannelSlot};

/// Launch, suspend and report: the part every challenging authenticator shares.
pub(crate) struct ChallengeDriver {
    kind: AuthenticatorKind,
    session_id: SessionId,
    ledger: Arc<ChallengeLedger>,
    analytics: Arc<dyn AnalyticsReporter>,
    channel: ResultChannelSlot,
}

impl ChallengeDriver {
    pub(crate) fn new(
        kind: AuthenticatorKind,
        session_id: SessionId,
        ledger: Arc<ChallengeLedger>,
        analytics: Arc<dyn AnalyticsReporter>,
    ) -> Self {
        Self {
            kind,
            session_id,
            ledger,
            analytics,
            channel: ResultChannelSlot::new(),
        }
    }

    pub(crate) fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub(crate) fn attach(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback) {
        self.channel.attach(caller, callback);
    }

    pub(crate) fn detach(&self) {
        self.channel.detach();
    }

    /// Launch `request` and wait for the result keyed by its correlation token.
    pub(crate) async fn run(
        &self,
        host: &dyn AuthHost,
        request: LaunchRequest,
        client_secret: &ClientSecret,
        stripe_account_id: Option<String>,
    ) {
        let token = request.args.correlation_token().clone();
        let receiver = self.ledger.open(token.clone());
        let _pending = PendingChallenge {
            ledger: &self.ledger,
            token: token.clone(),
        };

        self.report(AnalyticsEvent::ChallengeStarted {
            session_id: self.session_id,
            authenticator: self.kind,
            request_code: request.request_code,
        });

        let launched = match self.channel.caller() {
            Some(caller) => caller.launch(request),
            None => host.start_for_result(request),
        };

        let result = match launched {
            Ok(()) => match receiver.await {
                Ok(result) => result,
                Err(_) => {
                    tracing::debug!(%token, "Challenge abandoned before a result arrived");
                    PaymentFlowResult::new(
                        Some(client_secret.clone()),
                        FlowOutcome::failed("challenge abandoned"),
                    )
                    .with_correlation_token(token)
                    .with_stripe_account(stripe_account_id)
                }
            },
            Err(e) => {
                self.ledger.abandon(&token);
                tracing::warn!(authenticator = %self.kind, error = %e, "Failed to launch challenge");
                PaymentFlowResult::new(Some(client_secret.clone()), FlowOutcome::failed(e.to_string()))
                    .with_correlation_token(token)
                    .with_stripe_account(stripe_account_id)
            }
        };

        self.finish(result);
    }

    /// Report the outcome and hand the result to the attached channel, if any.
    pub(crate) fn finish(&self, result: PaymentFlowResult) {
        self.report(AnalyticsEvent::ChallengeCompleted {
            session_id: self.session_id,
            authenticator: self.kind,
            outcome: result.outcome.as_str().to_string(),
        });
        self.channel.deliver(result);
    }

    fn report(&self, event: AnalyticsEvent) {
        if let Err(e) = self.analytics.report(event) {
            tracing::debug!(error = %e, "Dropped analytics event");
        }
    }
}

/// Ledger entry of a running challenge. Removed when the waiting future goes away,
/// whether the challenge concluded or the caller stopped polling.
struct PendingChallenge<'a> {
    ledger: &'a ChallengeLedger,
    token: CorrelationToken,
}

impl Drop for PendingChallenge<'_> {
    fn drop(&mut self) {
        if self.ledger.abandon(&self.token) {
            tracing::debug!(token = %self.token, "Challenge abandoned by its caller");
        }
    }
}
