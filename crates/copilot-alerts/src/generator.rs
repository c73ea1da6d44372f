//! The alert generator: trigger context in, alert text out.
//!
//! Orchestrates the generation pipeline for one trigger:
//!
//! 1. Render the prompt from templates
//! 2. Call the LLM backend under a deadline
//! 3. Finalize the response (trim whitespace, substitute the fallback)
//!
//! The contract with the caller is that generation never fails and never
//! retries: any template error, backend failure, deadline overrun, or
//! empty response yields the fixed fallback message. The generator has no
//! other side effects and never mutates session state.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::AlertError;
use crate::llm::LlmBackend;
use crate::prompt::{AlertContext, PromptEngine};

/// The deterministic message substituted when generation fails or the
/// service returns nothing.
#[must_use]
pub fn fallback_message(scenario_name: &str) -> String {
    format!("Alert: {scenario_name} detected. Please stay focused on the road.")
}

/// Generates adaptive alerts by calling an external LLM backend.
pub struct AlertGenerator {
    prompt_engine: PromptEngine,
    backend: LlmBackend,
    request_timeout: Duration,
}

impl AlertGenerator {
    /// Create a generator from its components.
    pub const fn new(
        prompt_engine: PromptEngine,
        backend: LlmBackend,
        request_timeout: Duration,
    ) -> Self {
        Self {
            prompt_engine,
            backend,
            request_timeout,
        }
    }

    /// Generate the alert text for one trigger.
    ///
    /// Always returns a message; failures are recovered locally with
    /// [`fallback_message`] and logged at `warn`.
    pub async fn generate(&self, ctx: &AlertContext) -> String {
        let prompt = match self.prompt_engine.render(ctx) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(
                    scenario = ctx.scenario_name,
                    error = %e,
                    "prompt render failed, using fallback alert"
                );
                return fallback_message(&ctx.scenario_name);
            }
        };

        let result = match timeout(self.request_timeout, self.backend.complete(&prompt)).await {
            Ok(inner) => inner,
            Err(_) => {
                warn!(
                    scenario = ctx.scenario_name,
                    timeout_ms = self.request_timeout.as_millis(),
                    "generation deadline exceeded, using fallback alert"
                );
                Err(AlertError::Timeout)
            }
        };

        debug!(
            scenario = ctx.scenario_name,
            backend = self.backend.name(),
            occurrence = ctx.occurrence,
            urgency = %ctx.urgency,
            ok = result.is_ok(),
            "generation call finished"
        );

        finalize_response(result, &ctx.scenario_name)
    }
}

/// Map a backend result to the final alert text.
///
/// A successful, non-empty response is trimmed and returned as-is. An
/// error or an empty/whitespace-only response becomes the fallback.
fn finalize_response(result: Result<String, AlertError>, scenario_name: &str) -> String {
    match result {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                warn!(
                    scenario = scenario_name,
                    "service returned empty content, using fallback alert"
                );
                fallback_message(scenario_name)
            } else {
                trimmed.to_owned()
            }
        }
        Err(e) => {
            warn!(
                scenario = scenario_name,
                error = %e,
                "generation failed, using fallback alert"
            );
            fallback_message(scenario_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_types::UrgencyLevel;

    #[test]
    fn fallback_message_is_deterministic() {
        assert_eq!(
            fallback_message("Left Turn"),
            "Alert: Left Turn detected. Please stay focused on the road.",
        );
    }

    #[test]
    fn backend_error_yields_fallback() {
        let result: Result<String, AlertError> =
            Err(AlertError::Backend("connection refused".to_owned()));
        assert_eq!(
            finalize_response(result, "Drowsy Driver"),
            "Alert: Drowsy Driver detected. Please stay focused on the road.",
        );
    }

    #[test]
    fn timeout_yields_fallback() {
        let result: Result<String, AlertError> = Err(AlertError::Timeout);
        assert_eq!(
            finalize_response(result, "Rainy Weather"),
            "Alert: Rainy Weather detected. Please stay focused on the road.",
        );
    }

    #[test]
    fn empty_response_yields_fallback() {
        assert_eq!(
            finalize_response(Ok(String::new()), "Left Turn"),
            "Alert: Left Turn detected. Please stay focused on the road.",
        );
        assert_eq!(
            finalize_response(Ok("   \n  ".to_owned()), "Left Turn"),
            "Alert: Left Turn detected. Please stay focused on the road.",
        );
    }

    #[test]
    fn successful_response_is_trimmed() {
        let message = "  Heads up, left turn ahead.  \n";
        assert_eq!(
            finalize_response(Ok(message.to_owned()), "Left Turn"),
            "Heads up, left turn ahead.",
        );
    }

    #[tokio::test]
    async fn unreachable_backend_recovers_with_fallback() {
        use crate::config::{BackendType, LlmBackendConfig};
        use crate::llm::create_backend;

        // Minimal templates so only the backend call can fail.
        let Some(dir) = crate::test_templates::minimal_template_dir() else {
            return;
        };
        let Ok(prompt_engine) = PromptEngine::new(dir.path().to_str().unwrap_or("")) else {
            return;
        };

        // Nothing listens on port 9; the connection is refused immediately.
        let backend = create_backend(&LlmBackendConfig {
            backend_type: BackendType::OpenAi,
            api_url: "http://127.0.0.1:9/v1".to_owned(),
            api_key: "test".to_owned(),
            model: "test-model".to_owned(),
            max_completion_tokens: 150,
        });

        let generator =
            AlertGenerator::new(prompt_engine, backend, Duration::from_secs(5));

        let ctx = AlertContext {
            scenario_name: "Left Turn".to_owned(),
            description: "Driver preparing to make a left turn".to_owned(),
            occurrence: 1,
            urgency: UrgencyLevel::Calm,
            recent_alerts: Vec::new(),
        };

        let message = generator.generate(&ctx).await;
        assert_eq!(
            message,
            "Alert: Left Turn detected. Please stay focused on the road.",
        );
    }
}
