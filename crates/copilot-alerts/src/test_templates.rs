//! Shared template fixtures for the unit tests in this crate.

use tempfile::TempDir;

/// Materialize `system.j2` and `alert.j2` with the given bodies in a
/// fresh temp dir.
///
/// The directory is removed when the returned guard drops, even if the
/// test panics before its own cleanup would run.
pub fn template_dir(system: &str, alert: &str) -> Option<TempDir> {
    let dir = TempDir::new().ok()?;
    std::fs::write(dir.path().join("system.j2"), system).ok()?;
    std::fs::write(dir.path().join("alert.j2"), alert).ok()?;
    Some(dir)
}

/// The smallest template pair that still renders the scenario name.
pub fn minimal_template_dir() -> Option<TempDir> {
    template_dir("You are a co-pilot.", "Scenario: {{ scenario_name }}")
}
