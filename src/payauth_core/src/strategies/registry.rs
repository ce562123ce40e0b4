use std::sync::Arc;

use crate::{
    domain::{authenticatable::Authenticatable, session_id::SessionId},
    ports::launcher::{ResultCallback, ResultCaller},
    strategies::authenticator::PaymentAuthenticator,
};

/// Lookup and lifecycle surface of an authenticator registry.
pub trait PaymentAuthenticatorRegistry: Send + Sync {
    fn session_id(&self) -> SessionId;

    /// Pick the authenticator for `authenticatable`.
    fn get_authenticator(&self, authenticatable: &Authenticatable) -> Arc<dyn PaymentAuthenticator>;

    /// Attach the host's result channel to every authenticator.
    fn on_new_result_caller(&self, caller: Arc<dyn ResultCaller>, callback: ResultCallback);

    /// Detach the host's result channel from every authenticator.
    fn on_caller_invalidated(&self);
}
