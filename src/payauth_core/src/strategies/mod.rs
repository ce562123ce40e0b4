pub mod authenticator;
pub mod registry;
