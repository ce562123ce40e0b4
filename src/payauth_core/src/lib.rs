pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    authenticatable::{
        Authenticatable, AuthenticatableError, IntentKind, IntentStatus, PAYMENT_REQUEST_CODE,
        SETUP_REQUEST_CODE, SOURCE_REQUEST_CODE, Source, SourceFlow, SourceRedirect, StripeIntent,
    },
    client_secret::{ClientSecret, ClientSecretError},
    config::{PaymentAuthConfig, ThreeDs2Config, UiCustomization},
    correlation_token::CorrelationToken,
    flow_result::{FlowOutcome, PaymentFlowResult},
    next_action::{DirectoryServerEncryption, NextAction, NextActionKind, Use3ds2Data},
    request_options::RequestOptions,
    session_id::SessionId,
};

pub use ports::{
    launcher::{
        AuthHost, BrowserAuthArgs, LaunchArgs, LaunchError, LaunchRequest, LaunchTarget,
        ResultCallback, ResultCaller, Stripe3ds2Args,
    },
    services::{AnalyticsError, AnalyticsEvent, AnalyticsReporter},
};

pub use strategies::{
    authenticator::{AuthenticatorError, AuthenticatorKind, PaymentAuthenticator},
    registry::PaymentAuthenticatorRegistry,
};
