mod payment_auth_service;

pub use payment_auth_service::{PaymentAuthService, PaymentAuthServiceError};
