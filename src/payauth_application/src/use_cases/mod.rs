pub mod create_registry;
pub mod restore_session;
pub mod resume_challenge;

pub use create_registry::CreateRegistryUseCase;
pub use restore_session::{RestoreSessionError, RestoreSessionUseCase};
pub use resume_challenge::{ChallengeReturn, ResumeChallengeError, ResumeChallengeUseCase};
