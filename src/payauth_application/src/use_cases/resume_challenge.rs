use payauth_core::{CorrelationToken, LaunchArgs, PaymentFlowResult, SessionId};

use crate::{registry::RegistryError, registry_cache::RegistryCache};

/// Error types for resume challenge use case
#[derive(Debug, thiserror::Error)]
pub enum ResumeChallengeError {
    #[error("No live authentication session with id {0}")]
    SessionNotFound(SessionId),
    #[error("Registry error: {0}")]
    RegistryError(#[from] RegistryError),
    #[error("Malformed launch bundle: {0}")]
    MalformedBundle(#[from] serde_json::Error),
}

/// A challenge result on its way back from the challenge surface.
#[derive(Debug, Clone)]
pub struct ChallengeReturn {
    pub session_id: SessionId,
    pub correlation_token: CorrelationToken,
    pub result: PaymentFlowResult,
}

impl ChallengeReturn {
    /// Build the return from the bundle the challenge was launched with.
    pub fn from_launch_bundle(
        bundle: serde_json::Value,
        result: PaymentFlowResult,
    ) -> Result<Self, serde_json::Error> {
        let args = LaunchArgs::from_bundle(bundle)?;
        Ok(Self {
            session_id: args.session_id(),
            correlation_token: args.correlation_token().clone(),
            result,
        })
    }
}

/// Resume challenge use case - routes a challenge result back to the registry that
/// launched it, possibly after the host was recreated
pub struct ResumeChallengeUseCase<'a> {
    cache: &'a RegistryCache,
}

impl<'a> ResumeChallengeUseCase<'a> {
    pub fn new(cache: &'a RegistryCache) -> Self {
        Self { cache }
    }

    /// Execute the resume challenge use case
    ///
    /// # Arguments
    /// * `challenge_return` - Session id, correlation token and result
    ///
    /// # Returns
    /// Ok(()) once the waiting authenticator has been woken. `SessionNotFound` if
    /// the registry is gone; the pending authentication is then lost for good and
    /// the caller has to fail it.
    #[tracing::instrument(
        name = "ResumeChallengeUseCase::execute",
        skip_all,
        fields(session_id = %challenge_return.session_id)
    )]
    pub fn execute(&self, challenge_return: ChallengeReturn) -> Result<(), ResumeChallengeError> {
        let ChallengeReturn {
            session_id,
            correlation_token,
            result,
        } = challenge_return;

        let registry = self
            .cache
            .lookup(session_id)
            .ok_or(ResumeChallengeError::SessionNotFound(session_id))?;

        registry.complete_challenge(&correlation_token, result)?;
        Ok(())
    }
}
