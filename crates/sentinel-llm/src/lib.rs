//! LLM provider abstraction and backend implementations for report generation.

pub mod any;
pub mod error;
pub mod http;
#[cfg(feature = "mock")]
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod provider;

pub use error::{CallFailure, ErrorKind, LlmError};
pub use provider::{LlmProvider, Message, Role};
