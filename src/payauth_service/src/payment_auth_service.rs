use std::sync::Arc;

use payauth_adapters::{AnalyticsStream, PaymentAuthSettings};
use payauth_application::{
    AuthenticationComponent, ChallengeReturn, CreateRegistryUseCase, DefaultAuthenticatorRegistry,
    RegistryCache, RegistryError, RestoreSessionError, RestoreSessionUseCase,
    ResumeChallengeError, ResumeChallengeUseCase,
};
use payauth_core::{
    PaymentAuthenticatorRegistry, PaymentFlowResult, ResultCallback, ResultCaller, SessionId,
};

#[derive(Debug, thiserror::Error)]
pub enum PaymentAuthServiceError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    RestoreSession(#[from] RestoreSessionError),
    #[error(transparent)]
    ResumeChallenge(#[from] ResumeChallengeError),
}

/// Entry point for a host embedding payment authentication.
///
/// Holds the component every new session is built from and the cache sessions are
/// found in again after the host is recreated.
#[derive(Clone)]
pub struct PaymentAuthService {
    component: AuthenticationComponent,
    cache: Arc<RegistryCache>,
}

impl PaymentAuthService {
    /// Create a service over an explicit cache
    ///
    /// # Arguments
    /// * `component` - Configuration and analytics handed to every registry
    /// * `cache` - Where registries are indexed by session id
    pub fn new(component: AuthenticationComponent, cache: Arc<RegistryCache>) -> Self {
        Self { component, cache }
    }

    /// Create a service from loaded settings over the process-wide cache.
    ///
    /// With `analytics.sink = "channel"` the second value is the stream every
    /// session's analytics records arrive on.
    pub fn from_settings(settings: &PaymentAuthSettings) -> (Self, Option<AnalyticsStream>) {
        let (component, stream) = settings.component();
        (Self::new(component, RegistryCache::shared()), stream)
    }

    pub fn cache(&self) -> &Arc<RegistryCache> {
        &self.cache
    }

    /// Start a session for a host and attach its result channel.
    ///
    /// The host keeps the returned registry alive; once every holder lets go the
    /// session can no longer be restored.
    #[tracing::instrument(name = "PaymentAuthService::start_session", skip_all)]
    pub fn start_session(
        &self,
        caller: Arc<dyn ResultCaller>,
        callback: ResultCallback,
    ) -> Result<Arc<DefaultAuthenticatorRegistry>, PaymentAuthServiceError> {
        let registry = CreateRegistryUseCase::new(&self.cache).execute(self.component.clone())?;
        registry.on_new_result_caller(caller, callback);
        tracing::debug!(session_id = %registry.session_id(), "Attached host to new session");
        Ok(registry)
    }

    /// Re-attach a recreated host to its session.
    pub fn restore_session(
        &self,
        session_id: SessionId,
        caller: Arc<dyn ResultCaller>,
        callback: ResultCallback,
    ) -> Result<Arc<DefaultAuthenticatorRegistry>, PaymentAuthServiceError> {
        Ok(RestoreSessionUseCase::new(&self.cache).execute(session_id, caller, callback)?)
    }

    /// Hand a challenge result back, addressed by the bundle the challenge was
    /// launched with.
    pub fn resume_challenge(
        &self,
        launch_bundle: serde_json::Value,
        result: PaymentFlowResult,
    ) -> Result<(), PaymentAuthServiceError> {
        let challenge_return = ChallengeReturn::from_launch_bundle(launch_bundle, result)
            .map_err(ResumeChallengeError::from)?;
        ResumeChallengeUseCase::new(&self.cache).execute(challenge_return)?;
        Ok(())
    }
}
