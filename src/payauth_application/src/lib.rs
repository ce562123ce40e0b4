//! Registry, selection and challenge strategies for payment authentication.
//!
//! A [`DefaultAuthenticatorRegistry`] owns the authenticators of one session and is
//! indexed by session id in a [`RegistryCache`], so a host that was torn down while
//! a challenge was open can find the registry again and take the result.

pub mod authenticators;
pub mod challenge_ledger;
pub mod component;
pub mod registry;
pub mod registry_cache;
pub mod result_channel;
pub mod selector;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use authenticators::{NoOpAuthenticator, Stripe3ds2Authenticator, WebAuthenticator};
pub use challenge_ledger::ChallengeLedger;
pub use component::AuthenticationComponent;
pub use registry::{DefaultAuthenticatorRegistry, RegistryError};
pub use registry_cache::RegistryCache;
pub use result_channel::{ResultChannel, ResultChannelSlot};
pub use selector::{FallbackReason, Selection, authenticator_for_next_action, select};
pub use use_cases::{
    ChallengeReturn, CreateRegistryUseCase, RestoreSessionError, RestoreSessionUseCase,
    ResumeChallengeError, ResumeChallengeUseCase,
};
