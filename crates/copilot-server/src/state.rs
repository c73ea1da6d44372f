//! Shared application state for the Co-Pilot server.
//!
//! [`AppState`] owns the scenario catalog, the single user session, the
//! alert generator, and the speech service. The session lives behind a
//! [`tokio::sync::Mutex`]: the trigger handler holds the lock for the
//! whole pipeline, which gives the request/response semantics the
//! escalation logic assumes (no two generation calls for the same
//! session ever overlap).

use std::sync::Arc;

use copilot_alerts::AlertGenerator;
use copilot_core::Session;
use copilot_types::ScenarioCatalog;
use tokio::sync::Mutex;

use crate::speech::SpeechService;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The immutable scenario catalog.
    pub catalog: Arc<ScenarioCatalog>,
    /// The single user session (history, log, current alert).
    pub session: Arc<Mutex<Session>>,
    /// The LLM-backed alert generator.
    pub generator: Arc<AlertGenerator>,
    /// The speech playback service.
    pub speech: SpeechService,
}

impl AppState {
    /// Create application state with a fresh, empty session.
    #[must_use]
    pub fn new(generator: AlertGenerator, speech: SpeechService) -> Self {
        Self {
            catalog: Arc::new(ScenarioCatalog::builtin()),
            session: Arc::new(Mutex::new(Session::new())),
            generator: Arc::new(generator),
            speech,
        }
    }
}
