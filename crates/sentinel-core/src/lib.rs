//! Report generation orchestrator, configuration loading, and the boundaries
//! to activity export, subscriptions, and report persistence.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod prompt;
pub mod reporter;
pub mod request;
pub mod secret;
pub mod store;
pub mod subscriptions;

pub use error::{ConfigError, ReportError};
pub use generator::ReportGenerator;
pub use request::ReportRequest;
