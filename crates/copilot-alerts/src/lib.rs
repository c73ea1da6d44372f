//! LLM-backed adaptive alert generation.
//!
//! The generator turns a trigger (scenario, occurrence count, urgency,
//! recent alert context) into a short natural-language alert by calling an
//! external text-completion service. The pipeline is:
//!
//! ```text
//! AlertContext --> Prompt Engine --> LLM Backend --> finalize (trim / fallback)
//! ```
//!
//! Generation never fails from the caller's point of view: any backend
//! error, deadline overrun, or empty response is replaced by a fixed
//! fallback message so the user always receives an alert.

pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompt;

#[cfg(test)]
mod test_templates;

pub use config::{BackendType, GeneratorConfig, LlmBackendConfig};
pub use error::AlertError;
pub use generator::{AlertGenerator, fallback_message};
pub use llm::{LlmBackend, create_backend};
pub use prompt::{AlertContext, PromptEngine, RenderedPrompt};
