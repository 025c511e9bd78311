//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod env;
pub mod errors;
pub mod fs;
pub mod hash;

pub use config::Config;
pub use diagnostic::Diagnostic;
pub use env::Environment;
pub use errors::LocateError;
