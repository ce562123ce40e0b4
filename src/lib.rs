//! # Payauth - Payment Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the payment
//! authentication components. Use this crate to get everything in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! payauth = { path = "../payauth" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Authenticatable`, `NextAction`, `PaymentFlowResult`, etc.
//! - **Ports**: `AuthHost`, `ResultCaller`, `AnalyticsReporter`
//! - **Strategies**: `PaymentAuthenticator`, `PaymentAuthenticatorRegistry`
//! - **Use cases**: `CreateRegistryUseCase`, `RestoreSessionUseCase`, `ResumeChallengeUseCase`
//! - **Adapters**: settings, tracing setup, analytics reporters, `RecordingLauncher`
//! - **Service**: `PaymentAuthService` - The main entry point for a host

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use payauth_core::*;
}

// Re-export most commonly used core types at the root level
pub use payauth_core::{
    Authenticatable, AuthenticatableError, ClientSecret, CorrelationToken, FlowOutcome,
    NextAction, NextActionKind, PaymentAuthConfig, PaymentFlowResult, RequestOptions, SessionId,
    Source, StripeIntent,
};

// ============================================================================
// Ports and Strategies
// ============================================================================

/// Traits a host implements to launch challenges and receive telemetry
pub mod ports {
    pub use payauth_core::{
        AnalyticsError, AnalyticsEvent, AnalyticsReporter, AuthHost, LaunchArgs, LaunchError,
        LaunchRequest, LaunchTarget, ResultCallback, ResultCaller,
    };
}

pub use payauth_core::{
    AuthHost, AuthenticatorKind, PaymentAuthenticator, PaymentAuthenticatorRegistry,
    ResultCallback, ResultCaller,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Registry, selection and use cases
pub mod use_cases {
    pub use payauth_application::*;
}

// Re-export use cases at root level
pub use payauth_application::{
    AuthenticationComponent, CreateRegistryUseCase, DefaultAuthenticatorRegistry, RegistryCache,
    RestoreSessionUseCase, ResumeChallengeUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Analytics transports
    pub mod analytics {
        pub use payauth_adapters::analytics::*;
    }

    /// In-memory challenge surface
    pub mod launcher {
        pub use payauth_adapters::launcher::*;
    }

    /// Configuration
    pub mod config {
        pub use payauth_adapters::config::*;
    }

    pub use payauth_adapters::telemetry;
}

pub use payauth_adapters::{PaymentAuthSettings, RecordingLauncher, init_tracing};

// ============================================================================
// Payment Auth Service (Main Entry Point)
// ============================================================================

/// Main payment authentication service
pub use payauth_service::{PaymentAuthService, PaymentAuthServiceError};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the authenticator traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with client secrets and API keys
pub use secrecy::{ExposeSecret, Secret};
