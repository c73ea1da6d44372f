//! Server entry point for the Turn Co-Pilot assistant.
//!
//! Initializes logging, loads configuration from environment variables,
//! builds the alert generator (prompt templates + LLM backend) and the
//! speech service, then serves the demo page and REST API.

use std::sync::Arc;

use copilot_alerts::{AlertGenerator, GeneratorConfig, PromptEngine, create_backend};
use copilot_server::speech::{SpeechConfig, SpeechService};
use copilot_server::state::AppState;
use copilot_server::{ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, templates are missing,
/// or the server fails to bind or serve.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("copilot-server starting");

    // Load configuration from environment
    let generator_config = GeneratorConfig::from_env()?;
    info!(
        backend_model = generator_config.backend.model,
        templates_dir = generator_config.templates_dir,
        request_timeout_ms = generator_config.request_timeout.as_millis(),
        "generator configuration loaded"
    );

    // Load prompt templates
    let prompt_engine = PromptEngine::new(&generator_config.templates_dir)?;
    info!(
        templates_dir = generator_config.templates_dir,
        "prompt templates loaded"
    );

    // Create the LLM backend and generator
    let backend = create_backend(&generator_config.backend);
    info!(
        backend = backend.name(),
        model = generator_config.backend.model,
        "LLM backend configured"
    );
    let generator =
        AlertGenerator::new(prompt_engine, backend, generator_config.request_timeout);

    // Speech playback service
    let speech_config = SpeechConfig::from_env();
    info!(
        command = speech_config.command,
        rate = speech_config.rate,
        "speech service configured"
    );
    let speech = SpeechService::new(speech_config);

    // Serve
    let state = Arc::new(AppState::new(generator, speech));
    let server_config = ServerConfig::from_env();
    start_server(&server_config, state).await?;

    Ok(())
}
