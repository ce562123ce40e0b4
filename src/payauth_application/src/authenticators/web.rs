use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use payauth_core::{
    AnalyticsReporter, Authenticatable, AuthHost, AuthenticatorError, AuthenticatorKind,
    BrowserAuthArgs, CorrelationToken, LaunchArgs, LaunchRequest, NextAction,
    PaymentAuthConfig, PaymentAuthenticator, PaymentFlowResult, RequestOptions, ResultCallback,
    ResultCaller, SessionId, Source,
};

use crate::{authenticators::challenge::ChallengeDriver, challenge_ledger::ChallengeLedger};

/// Authenticator sending the customer to a browser surface that redirects back to
/// the app once the challenge is done.
///
/// Handles redirect-style intent next actions and every source. Sources whose
/// flow needs no redirect are completed without opening a browser.
pub struct WebAuthenticator {
    driver: ChallengeDriver,
    config: PaymentAuthConfig,
    enable_logging: bool,
    three_ds1_return_urls: Arc<DashMap<String, String>>,
}

struct Redirect {
    url: String,
    return_url: Option<String>,
    should_cancel_source: bool,
}

impl WebAuthenticator {
    pub fn new(
        session_id: SessionId,
        ledger: Arc<ChallengeLedger>,
        analytics: Arc<dyn AnalyticsReporter>,
        config: PaymentAuthConfig,
        enable_logging: bool,
        three_ds1_return_urls: Arc<DashMap<String, String>>,
    ) -> Self {
        Self {
            driver: ChallengeDriver::new(
                AuthenticatorKind::BrowserRedirect,
                session_id,
                ledger,
                analytics,
            ),
            config,
            enable_logging,
            three_ds1_return_urls,
        }
    }

    fn intent_redirect(&self, intent_id: &str, next_action: &NextAction) -> Option<Redirect> {
        let (url, return_url) = match next_action {
            NextAction::Use3ds1 { url } => (
                url.clone(),
                self.three_ds1_return_urls
                    .remove(intent_id)
                    .map(|(_, return_url)| return_url),
            ),
            NextAction::RedirectToUrl { url, return_url } => (url.clone(), return_url.clone()),
            NextAction::AlipayRedirect {
                web_view_url,
                return_url,
            } => (web_view_url.clone(), return_url.clone()),
            NextAction::Use3ds2(_)
            | NextAction::DisplayOxxoDetails { .. }
            | NextAction::BlikAuthorize
            | NextAction::Unknown => return None,
        };
        Some(Redirect {
            url,
            return_url,
            should_cancel_source: false,
        })
    }

    fn source_redirect(source: &Source) -> Option<Redirect> {
        let url = source.redirect_url()?.to_string();
        Some(Redirect {
            url,
            return_url: source.redirect.as_ref().and_then(|r| r.return_url.clone()),
            should_cancel_source: true,
        })
    }
}

#[async_trait]
impl PaymentAuthenticator for WebAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::BrowserRedirect
    }

    #[tracing::instrument(
        name = "WebAuthenticator::authenticate",
        skip_all,
        fields(session_id = %self.driver.session_id(), object_id = authenticatable.id())
    )]
    async fn authenticate(
        &self,
        host: &dyn AuthHost,
        authenticatable: &Authenticatable,
        request_options: &RequestOptions,
    ) -> Result<(), AuthenticatorError> {
        let redirect = match authenticatable {
            Authenticatable::Intent(intent) => {
                let redirect = intent
                    .next_action
                    .as_ref()
                    .and_then(|action| self.intent_redirect(&intent.id, action));
                match redirect {
                    Some(redirect) => redirect,
                    None => return Err(AuthenticatorError::mismatch(self.kind(), authenticatable)),
                }
            }
            Authenticatable::Source(source) => match Self::source_redirect(source) {
                Some(redirect) => redirect,
                None => {
                    tracing::debug!(flow = ?source.flow, "Source needs no redirect, relaying result");
                    self.driver.finish(
                        PaymentFlowResult::completed(source.client_secret.clone())
                            .with_source_id(source.id.clone())
                            .with_stripe_account(request_options.stripe_account.clone()),
                    );
                    return Ok(());
                }
            },
        };

        let object_id = authenticatable.id().to_string();
        let return_url = redirect
            .return_url
            .unwrap_or_else(|| self.config.default_return_url(&object_id));

        let args = LaunchArgs::PaymentBrowserAuth(BrowserAuthArgs {
            object_id,
            request_code: authenticatable.request_code(),
            client_secret: authenticatable.client_secret().clone(),
            url: redirect.url,
            return_url,
            correlation_token: CorrelationToken::new(),
            session_id: self.driver.session_id(),
            enable_logging: self.enable_logging,
            stripe_account_id: request_options.stripe_account.clone(),
            should_cancel_source: redirect.should_cancel_source,
            status_bar_color: host.status_bar_color(),
        });

        self.driver
            .run(
                host,
                LaunchRequest::new(authenticatable.request_code(), args),
                authenticatable.client_secret(),
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
