use std::sync::Arc;

use payauth_core::{PaymentAuthenticatorRegistry, ResultCallback, ResultCaller, SessionId};

use crate::{registry::DefaultAuthenticatorRegistry, registry_cache::RegistryCache};

/// Error types for restore session use case
#[derive(Debug, thiserror::Error)]
pub enum RestoreSessionError {
    #[error("No live authentication session with id {0}")]
    SessionNotFound(SessionId),
}

/// Restore session use case - re-attaches a recreated host to the registry that
/// started its pending challenges
pub struct RestoreSessionUseCase<'a> {
    cache: &'a RegistryCache,
}

impl<'a> RestoreSessionUseCase<'a> {
    pub fn new(cache: &'a RegistryCache) -> Self {
        Self { cache }
    }

    /// Execute the restore session use case
    ///
    /// # Arguments
    /// * `session_id` - Session id read back from the launch bundle
    /// * `caller` - The recreated host's launcher
    /// * `callback` - The recreated host's result callback
    ///
    /// # Returns
    /// The registry, now attached to the new channel, or `SessionNotFound` if it
    /// was dropped while the host was gone
    #[tracing::instrument(name = "RestoreSessionUseCase::execute", skip(self, caller, callback))]
    pub fn execute(
        &self,
        session_id: SessionId,
        caller: Arc<dyn ResultCaller>,
        callback: ResultCallback,
    ) -> Result<Arc<DefaultAuthenticatorRegistry>, RestoreSessionError> {
        let registry = self
            .cache
            .lookup(session_id)
            .ok_or(RestoreSessionError::SessionNotFound(session_id))?;

        registry.on_new_result_caller(caller, callback);
        Ok(registry)
    }
}
