pub mod launcher;
pub mod services;
