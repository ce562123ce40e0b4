use std::sync::Arc;

use crate::{
    component::AuthenticationComponent,
    registry::{DefaultAuthenticatorRegistry, RegistryError},
    registry_cache::RegistryCache,
};

/// Create registry use case - bootstraps the registry of one authentication session
pub struct CreateRegistryUseCase<'a> {
    cache: &'a RegistryCache,
}

impl<'a> CreateRegistryUseCase<'a> {
    pub fn new(cache: &'a RegistryCache) -> Self {
        Self { cache }
    }

    /// Execute the create registry use case
    ///
    /// # Arguments
    /// * `component` - Dependencies shared by the session's authenticators
    ///
    /// # Returns
    /// The registered registry, or `RegistryError::Construction` if the
    /// dependencies are unusable
    #[tracing::instrument(name = "CreateRegistryUseCase::execute", skip_all)]
    pub fn execute(
        &self,
        component: AuthenticationComponent,
    ) -> Result<Arc<DefaultAuthenticatorRegistry>, RegistryError> {
        let registry = DefaultAuthenticatorRegistry::create_instance(component, self.cache)?;
        tracing::info!(session_id = %registry.session_id(), "Authentication session started");
        Ok(registry)
    }
}
