//! Speech playback as an explicit background job.
//!
//! Playback shells out to a configured synthesizer command (default
//! `espeak`) with fixed rate, pitch, and volume parameters. The job is
//! fire-and-forget: it is spawned onto the runtime and reports its
//! outcome through a status record the UI layer can poll. A playback
//! failure is advisory only and never touches the alert state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Configuration for the speech synthesizer command.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// The synthesizer executable (default `espeak`).
    pub command: String,
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Voice pitch, 0-99.
    pub pitch: u32,
    /// Output amplitude, 0-200.
    pub volume: u32,
}

impl SpeechConfig {
    /// Load speech configuration from environment variables, falling back
    /// to defaults for anything unset or unparseable.
    ///
    /// Variables: `COPILOT_SPEECH_COMMAND`, `COPILOT_SPEECH_RATE`,
    /// `COPILOT_SPEECH_PITCH`, `COPILOT_SPEECH_VOLUME`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            command: std::env::var("COPILOT_SPEECH_COMMAND")
                .unwrap_or(defaults.command),
            rate: env_u32("COPILOT_SPEECH_RATE", defaults.rate),
            pitch: env_u32("COPILOT_SPEECH_PITCH", defaults.pitch),
            volume: env_u32("COPILOT_SPEECH_VOLUME", defaults.volume),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: String::from("espeak"),
            rate: 175,
            pitch: 50,
            volume: 100,
        }
    }
}

/// Read a `u32` environment variable, falling back to a default.
fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// The lifecycle state of the most recent speech job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechState {
    /// No speech job has been queued yet.
    Idle,
    /// A job is currently synthesizing audio.
    Playing,
    /// The last job completed successfully.
    Done,
    /// The last job failed; `detail` carries the reason.
    Failed,
}

/// Status record of the most recent speech job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechReport {
    /// The job's lifecycle state.
    pub state: SpeechState,
    /// Failure detail when `state` is `failed`.
    pub detail: Option<String>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl SpeechReport {
    fn now(state: SpeechState, detail: Option<String>) -> Self {
        Self {
            state,
            detail,
            updated_at: Utc::now(),
        }
    }
}

impl Default for SpeechReport {
    fn default() -> Self {
        Self::now(SpeechState::Idle, None)
    }
}

/// Queues speech playback jobs and tracks the latest status.
#[derive(Clone)]
pub struct SpeechService {
    config: SpeechConfig,
    report: Arc<RwLock<SpeechReport>>,
}

impl SpeechService {
    /// Create a service with the given synthesizer configuration.
    #[must_use]
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            report: Arc::new(RwLock::new(SpeechReport::default())),
        }
    }

    /// Queue playback of `text` as a detached background job.
    ///
    /// Returns as soon as the job is spawned. The outcome lands in the
    /// status record readable via [`SpeechService::status`].
    pub async fn speak(&self, text: String) {
        {
            let mut guard = self.report.write().await;
            *guard = SpeechReport::now(SpeechState::Playing, None);
        }

        let config = self.config.clone();
        let report = Arc::clone(&self.report);
        tokio::spawn(async move {
            let outcome = run_synthesizer(&config, &text).await;
            let mut guard = report.write().await;
            *guard = match outcome {
                Ok(()) => {
                    debug!(command = config.command, "speech playback finished");
                    SpeechReport::now(SpeechState::Done, None)
                }
                Err(detail) => {
                    warn!(
                        command = config.command,
                        detail = detail,
                        "speech playback failed"
                    );
                    SpeechReport::now(SpeechState::Failed, Some(detail))
                }
            };
        });
    }

    /// The status record of the most recent job.
    pub async fn status(&self) -> SpeechReport {
        self.report.read().await.clone()
    }
}

/// Run the synthesizer command to completion.
async fn run_synthesizer(config: &SpeechConfig, text: &str) -> Result<(), String> {
    let output = tokio::process::Command::new(&config.command)
        .arg("-s")
        .arg(config.rate.to_string())
        .arg("-p")
        .arg(config.pitch.to_string())
        .arg("-a")
        .arg(config.volume.to_string())
        .arg(text)
        .output()
        .await
        .map_err(|e| format!("failed to run {}: {e}", config.command))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!(
            "{} exited with {}: {}",
            config.command,
            output.status,
            stderr.trim(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_are_fixed_parameters() {
        let config = SpeechConfig::default();
        assert_eq!(config.command, "espeak");
        assert_eq!(config.rate, 175);
        assert_eq!(config.pitch, 50);
        assert_eq!(config.volume, 100);
    }

    #[tokio::test]
    async fn successful_job_reports_done() {
        // `true` ignores its arguments and exits 0, standing in for a
        // synthesizer that works.
        let service = SpeechService::new(SpeechConfig {
            command: String::from("true"),
            ..SpeechConfig::default()
        });

        service.speak("Left turn ahead.".to_owned()).await;

        // Wait for the detached job to land its status.
        for _ in 0..50 {
            if service.status().await.state == SpeechState::Done {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(service.status().await.state, SpeechState::Done);
    }

    #[tokio::test]
    async fn failing_job_reports_detail() {
        let service = SpeechService::new(SpeechConfig {
            command: String::from("copilot-no-such-synthesizer"),
            ..SpeechConfig::default()
        });

        service.speak("anything".to_owned()).await;

        for _ in 0..50 {
            if service.status().await.state == SpeechState::Failed {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let report = service.status().await;
        assert_eq!(report.state, SpeechState::Failed);
        assert!(report.detail.is_some(), "failure should carry a detail");
    }
}
