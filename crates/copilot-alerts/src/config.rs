//! Configuration types for the alert generator.
//!
//! All configuration is loaded from environment variables. The generator
//! needs to know which LLM backend to use (URL, API key, model name), the
//! response-length bound, the generation deadline, and where the prompt
//! templates live.

use std::time::Duration;

use crate::error::AlertError;

/// Default model identifier when `COPILOT_LLM_MODEL` is unset.
const DEFAULT_MODEL: &str = "gpt-5";

/// Default upper bound on generated tokens (alerts are 1-2 sentences).
const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 150;

/// Complete generator configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// LLM backend configuration.
    pub backend: LlmBackendConfig,
    /// Maximum time allowed for one generation call.
    pub request_timeout: Duration,
    /// Path to the prompt templates directory.
    pub templates_dir: String,
}

/// Configuration for a single LLM backend.
#[derive(Debug, Clone)]
pub struct LlmBackendConfig {
    /// The backend type (openai-compatible or anthropic).
    pub backend_type: BackendType,
    /// Base API URL (e.g. `https://api.openai.com/v1`).
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier (e.g. `gpt-5`).
    pub model: String,
    /// Upper bound on the length of the generated response, in tokens.
    pub max_completion_tokens: u32,
}

/// Supported LLM backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// `OpenAI`-compatible chat completions API (works with `OpenAI`,
    /// `DeepSeek`, and Ollama endpoints).
    OpenAi,
    /// Anthropic Messages API (different request format).
    Anthropic,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `COPILOT_LLM_BACKEND` -- backend type (default `openai`)
    /// - `COPILOT_LLM_API_URL` -- API base URL (default per backend)
    /// - `COPILOT_LLM_API_KEY` -- API key; falls back to `OPENAI_API_KEY`
    ///   or `ANTHROPIC_API_KEY` depending on the backend type
    /// - `COPILOT_LLM_MODEL` -- model name (default `gpt-5`)
    /// - `COPILOT_MAX_COMPLETION_TOKENS` -- response-length bound (default 150)
    /// - `COPILOT_REQUEST_TIMEOUT_MS` -- generation deadline (default 10000)
    /// - `COPILOT_TEMPLATES_DIR` -- prompt templates path (default `templates`)
    pub fn from_env() -> Result<Self, AlertError> {
        let backend_str =
            std::env::var("COPILOT_LLM_BACKEND").unwrap_or_else(|_| "openai".to_owned());
        let backend_type = parse_backend_type(&backend_str)?;

        let api_url = std::env::var("COPILOT_LLM_API_URL")
            .unwrap_or_else(|_| default_api_url(backend_type).to_owned());

        let api_key = std::env::var("COPILOT_LLM_API_KEY")
            .ok()
            .or_else(|| std::env::var(vendor_key_var(backend_type)).ok())
            .ok_or_else(|| {
                AlertError::Config(format!(
                    "missing API key: set COPILOT_LLM_API_KEY or {}",
                    vendor_key_var(backend_type)
                ))
            })?;

        let model =
            std::env::var("COPILOT_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        let max_completion_tokens: u32 = std::env::var("COPILOT_MAX_COMPLETION_TOKENS")
            .unwrap_or_else(|_| DEFAULT_MAX_COMPLETION_TOKENS.to_string())
            .parse()
            .map_err(|e| {
                AlertError::Config(format!("invalid COPILOT_MAX_COMPLETION_TOKENS: {e}"))
            })?;

        let request_timeout_ms: u64 = std::env::var("COPILOT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_owned())
            .parse()
            .map_err(|e| AlertError::Config(format!("invalid COPILOT_REQUEST_TIMEOUT_MS: {e}")))?;

        let templates_dir =
            std::env::var("COPILOT_TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_owned());

        Ok(Self {
            backend: LlmBackendConfig {
                backend_type,
                api_url,
                api_key,
                model,
                max_completion_tokens,
            },
            request_timeout: Duration::from_millis(request_timeout_ms),
            templates_dir,
        })
    }
}

/// Parse a backend type from its configuration string.
fn parse_backend_type(s: &str) -> Result<BackendType, AlertError> {
    match s.to_lowercase().as_str() {
        "openai" | "deepseek" | "ollama" => Ok(BackendType::OpenAi),
        "anthropic" | "claude" => Ok(BackendType::Anthropic),
        other => Err(AlertError::Config(format!("unknown backend type: {other}"))),
    }
}

/// The vendor's conventional API key variable for a backend type.
const fn vendor_key_var(backend_type: BackendType) -> &'static str {
    match backend_type {
        BackendType::OpenAi => "OPENAI_API_KEY",
        BackendType::Anthropic => "ANTHROPIC_API_KEY",
    }
}

/// The default API base URL for a backend type.
const fn default_api_url(backend_type: BackendType) -> &'static str {
    match backend_type {
        BackendType::OpenAi => "https://api.openai.com/v1",
        BackendType::Anthropic => "https://api.anthropic.com/v1",
    }
}
