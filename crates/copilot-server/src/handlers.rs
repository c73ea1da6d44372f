//! HTTP endpoint handlers for the Co-Pilot server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML demo page |
//! | `GET` | `/api/scenarios` | The scenario catalog |
//! | `POST` | `/api/scenarios/{id}/trigger` | Run the trigger pipeline |
//! | `GET` | `/api/alerts` | Bounded log (newest-first) + current alert |
//! | `GET` | `/api/alerts/current` | Current alert only |
//! | `GET` | `/api/stats` | Per-scenario occurrence statistics |
//! | `POST` | `/api/speech` | Queue speech playback |
//! | `GET` | `/api/speech/status` | Last speech job status |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use copilot_alerts::AlertContext;
use copilot_types::{AlertEntry, UrgencyLevel};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML demo page
// ---------------------------------------------------------------------------

/// Page style shared by the demo page (dark dashboard look).
const PAGE_STYLE: &str = r"
body {
    background: #0d1117;
    color: #c9d1d9;
    font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
    padding: 2rem;
    max-width: 800px;
    margin: 0 auto;
}
h1 { color: #58a6ff; margin-bottom: 0.25rem; }
.subtitle { color: #8b949e; margin-top: 0; }
button.scenario {
    background: #161b22;
    color: #c9d1d9;
    border: 1px solid #30363d;
    border-radius: 6px;
    padding: 0.8rem 1.2rem;
    margin: 0.3rem 0.3rem 0.3rem 0;
    cursor: pointer;
    font: inherit;
}
button.scenario:hover { border-color: #58a6ff; }
#current {
    border: 1px solid #30363d;
    border-radius: 6px;
    padding: 1rem 1.5rem;
    margin: 1rem 0;
    min-height: 2rem;
}
#current.calm { border-color: #3fb950; }
#current.moderate { border-color: #d29922; }
#current.firm { border-color: #db6d28; }
#current.critical { border-color: #f85149; }
.meta { color: #8b949e; font-size: 0.85rem; }
ul#log, ul#stats { list-style: none; padding: 0; }
ul#log li, ul#stats li { padding: 0.3rem 0; border-bottom: 1px solid #21262d; }
hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
";

/// Client script driving the demo page against the REST API.
const PAGE_SCRIPT: &str = r#"
async function refresh() {
    const res = await fetch('/api/alerts');
    const data = await res.json();
    const current = document.getElementById('current');
    if (data.current) {
        current.className = data.current.urgency;
        current.innerHTML = '<strong>' + data.current.icon + ' ' +
            data.current.scenario_name + '</strong> &mdash; ' + data.current.message +
            '<div class="meta">occurrence ' + data.current.occurrence +
            ' &middot; urgency ' + data.current.urgency + '</div>';
    }
    const log = document.getElementById('log');
    log.innerHTML = '';
    for (const entry of data.alerts) {
        const li = document.createElement('li');
        li.textContent = entry.icon + ' ' + entry.scenario_name + ': ' + entry.message;
        log.appendChild(li);
    }
    const statsRes = await fetch('/api/stats');
    const statsData = await statsRes.json();
    const stats = document.getElementById('stats');
    stats.innerHTML = '';
    for (const s of statsData.stats) {
        const li = document.createElement('li');
        li.textContent = s.scenario_name + ': ' + s.occurrences +
            ' (' + s.urgency + ')';
        stats.appendChild(li);
    }
}
async function trigger(id) {
    await fetch('/api/scenarios/' + id + '/trigger', { method: 'POST' });
    await refresh();
}
async function speak() {
    await fetch('/api/speech', { method: 'POST' });
}
refresh();
"#;

/// Serve the minimal HTML demo page: scenario buttons, the current alert
/// styled by urgency, the bounded log newest-first, and per-scenario
/// statistics.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let buttons: String = state
        .catalog
        .all()
        .iter()
        .map(|s| {
            format!(
                r#"<button class="scenario" onclick="trigger('{}')">{} {}</button>"#,
                s.id, s.icon, s.name,
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Turn Co-Pilot</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
    <h1>Turn Co-Pilot</h1>
    <p class="subtitle">Adaptive AI driving assistant</p>

    <div>{buttons}</div>

    <hr>

    <h2>Current alert</h2>
    <div id="current"></div>
    <button class="scenario" onclick="speak()">Speak alert</button>

    <h2>Recent alerts</h2>
    <ul id="log"></ul>

    <h2>Scenario statistics</h2>
    <ul id="stats"></ul>

    <script>{PAGE_SCRIPT}</script>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/scenarios -- the scenario catalog
// ---------------------------------------------------------------------------

/// List the immutable scenario catalog in catalog order.
pub async fn list_scenarios(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "count": state.catalog.len(),
        "scenarios": state.catalog.all(),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/scenarios/{id}/trigger -- run the trigger pipeline
// ---------------------------------------------------------------------------

/// Trigger a scenario: record the occurrence, generate the adaptive alert,
/// commit it to the session, and return the new entry.
///
/// The session lock is held across the generation call, so triggers are
/// processed strictly one at a time.
pub async fn trigger_scenario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let scenario = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("scenario {id}")))?;

    let mut session = state.session.lock().await;

    let outcome = session.begin_trigger(&scenario);
    let ctx = AlertContext {
        scenario_name: scenario.name.clone(),
        description: scenario.description.clone(),
        occurrence: outcome.occurrence,
        urgency: outcome.urgency,
        recent_alerts: session.recent_messages(),
    };

    let message = state.generator.generate(&ctx).await;

    info!(
        scenario = scenario.name,
        occurrence = outcome.occurrence,
        urgency = %outcome.urgency,
        "alert generated"
    );

    let entry = AlertEntry::new(&scenario, message, outcome.occurrence);
    session.commit(entry.clone());

    Ok(Json(serde_json::json!({ "alert": entry })))
}

// ---------------------------------------------------------------------------
// GET /api/alerts -- bounded log + current alert
// ---------------------------------------------------------------------------

/// Return the bounded alert log newest-first plus the current alert.
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;

    let alerts: Vec<&AlertEntry> = session.log().iter_newest_first().collect();

    Json(serde_json::json!({
        "count": alerts.len(),
        "alerts": alerts,
        "current": session.current_alert(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/alerts/current -- current alert only
// ---------------------------------------------------------------------------

/// Return the most recently generated alert, or `null` before the first
/// trigger.
pub async fn current_alert(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;
    Json(serde_json::json!({ "alert": session.current_alert() }))
}

// ---------------------------------------------------------------------------
// GET /api/stats -- per-scenario occurrence statistics
// ---------------------------------------------------------------------------

/// Return the occurrence count and derived urgency for every scenario
/// triggered this session, most-triggered first.
pub async fn scenario_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.lock().await;

    let mut counts: Vec<(String, u32)> = session
        .tracker()
        .counts()
        .map(|(name, count)| (name.to_owned(), count))
        .collect();
    // Stable sort over the tracker's name order keeps ties deterministic.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let stats: Vec<serde_json::Value> = counts
        .into_iter()
        .map(|(name, count)| {
            serde_json::json!({
                "scenario_name": name,
                "occurrences": count,
                "urgency": UrgencyLevel::from_count(count),
            })
        })
        .collect();

    Json(serde_json::json!({ "count": stats.len(), "stats": stats }))
}

// ---------------------------------------------------------------------------
// POST /api/speech -- queue speech playback
// ---------------------------------------------------------------------------

/// Request body for `POST /api/speech`.
#[derive(Debug, serde::Deserialize)]
pub struct SpeakRequest {
    /// Text to speak. Defaults to the current alert's message.
    pub text: Option<String>,
}

/// Queue speech playback of the given text or the current alert.
///
/// Returns 404 when there is no text and no current alert. The playback
/// outcome is advisory only; poll `GET /api/speech/status` for it.
pub async fn speak(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SpeakRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let requested = body.and_then(|Json(req)| req.text);

    let text = match requested {
        Some(text) => text,
        None => {
            let session = state.session.lock().await;
            session
                .current_alert()
                .map(|entry| entry.message.clone())
                .ok_or_else(|| ApiError::NotFound("no current alert to speak".to_owned()))?
        }
    };

    state.speech.speak(text).await;

    Ok(Json(serde_json::json!({ "status": "queued" })))
}

// ---------------------------------------------------------------------------
// GET /api/speech/status -- last speech job status
// ---------------------------------------------------------------------------

/// Return the status record of the most recent speech job.
pub async fn speech_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.speech.status().await)
}
