//! Error types for the alert generator.
//!
//! Uses `thiserror` for typed errors inside the generation pipeline.
//! None of these reach the trigger handler: [`AlertGenerator::generate`]
//! recovers every failure with the fixed fallback message.
//!
//! [`AlertGenerator::generate`]: crate::generator::AlertGenerator::generate

/// Errors that can occur inside the alert generation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// Failed to load or render a prompt template.
    #[error("template error: {0}")]
    Template(String),

    /// The LLM backend returned an error or was unreachable.
    #[error("LLM backend error: {0}")]
    Backend(String),

    /// The generation deadline was exceeded.
    #[error("timeout: alert generation exceeded deadline")]
    Timeout,

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
