//! Concrete challenge strategies, one per [`payauth_core::AuthenticatorKind`].

mod challenge;
pub mod no_op;
pub mod stripe_3ds2;
pub mod web;

pub use no_op::NoOpAuthenticator;
pub use stripe_3ds2::Stripe3ds2Authenticator;
pub use web::WebAuthenticator;
