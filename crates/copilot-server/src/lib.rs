//! HTTP server for the Turn Co-Pilot assistant.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Minimal HTML demo page** (`GET /`) with the scenario buttons,
//!   current alert, and the bounded alert log
//! - **REST endpoints** for the scenario catalog, the trigger pipeline,
//!   and the alert log
//! - **Speech endpoints** to queue playback of the current alert as
//!   synthesized speech and poll the job status
//!
//! # Architecture
//!
//! One logical user session lives behind a [`tokio::sync::Mutex`] in
//! [`state::AppState`]. The trigger handler holds the session lock for
//! the whole pipeline (count, generate, commit), so two generation calls
//! for the same session never overlap and each trigger runs to
//! completion before the next is served. Speech playback is the only
//! detached unit of work; it communicates solely through a status report
//! the UI can poll.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod speech;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use speech::{SpeechConfig, SpeechReport, SpeechService, SpeechState};
pub use state::AppState;
