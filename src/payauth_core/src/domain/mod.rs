pub mod authenticatable;
pub mod client_secret;
pub mod config;
pub mod correlation_token;
pub mod flow_result;
pub mod next_action;
pub mod request_options;
pub mod session_id;
