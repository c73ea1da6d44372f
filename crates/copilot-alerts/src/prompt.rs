//! Prompt template loading and rendering via `minijinja`.
//!
//! Templates are loaded from the filesystem (default: `templates/`
//! directory) so operators can tune the co-pilot's voice without
//! recompiling. The template engine renders the trigger context (scenario,
//! occurrence count, urgency, recent alerts) into the system and user
//! messages sent to the LLM backend.

use minijinja::Environment;
use serde::Serialize;

use crate::error::AlertError;
use copilot_types::UrgencyLevel;

/// The context rendered into the alert prompt.
#[derive(Debug, Clone, Serialize)]
pub struct AlertContext {
    /// Display name of the triggered scenario.
    pub scenario_name: String,
    /// Human-readable description of the scenario.
    pub description: String,
    /// How many times the scenario has occurred this session.
    pub occurrence: u32,
    /// The urgency label the tone should match.
    pub urgency: UrgencyLevel,
    /// Up to the 3 most recent alert messages, oldest-first, so the
    /// service can avoid repeating phrasing.
    pub recent_alerts: Vec<String>,
}

/// Manages prompt template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with the alert templates
/// pre-loaded. Templates can be edited on disk and will be picked up on
/// the next call to [`PromptEngine::new`].
pub struct PromptEngine {
    env: Environment<'static>,
}

/// The complete rendered prompt ready to send to an LLM backend.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    /// System message establishing the co-pilot persona.
    pub system: String,
    /// User message containing the trigger context and tone guidelines.
    pub user: String,
}

impl PromptEngine {
    /// Create a new prompt engine loading templates from the given directory.
    ///
    /// The directory must contain `system.j2` and `alert.j2`.
    pub fn new(templates_dir: &str) -> Result<Self, AlertError> {
        let mut env = Environment::new();

        let system_tpl = load_template(templates_dir, "system.j2")?;
        let alert_tpl = load_template(templates_dir, "alert.j2")?;

        env.add_template_owned("system", system_tpl)
            .map_err(|e| AlertError::Template(format!("failed to add system template: {e}")))?;
        env.add_template_owned("alert", alert_tpl)
            .map_err(|e| AlertError::Template(format!("failed to add alert template: {e}")))?;

        Ok(Self { env })
    }

    /// Render the full prompt for one trigger.
    pub fn render(&self, ctx: &AlertContext) -> Result<RenderedPrompt, AlertError> {
        let ctx_json = serde_json::to_value(ctx)?;

        let system = self
            .env
            .get_template("system")
            .map_err(|e| AlertError::Template(format!("missing system template: {e}")))?
            .render(&ctx_json)
            .map_err(|e| AlertError::Template(format!("system render failed: {e}")))?;

        let user = self
            .env
            .get_template("alert")
            .map_err(|e| AlertError::Template(format!("missing alert template: {e}")))?
            .render(&ctx_json)
            .map_err(|e| AlertError::Template(format!("alert render failed: {e}")))?;

        Ok(RenderedPrompt { system, user })
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, AlertError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| AlertError::Template(format!("failed to read {path}: {e}")))
}
