//! Alert entries recorded per trigger event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::scenario::Scenario;
use crate::urgency::UrgencyLevel;

/// A single generated alert tied to one trigger event.
///
/// Entries are appended to the session's bounded log and the most recent
/// one is the "current alert" shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AlertEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Display name of the scenario that triggered the alert.
    pub scenario_name: String,
    /// Icon of the scenario, carried for display.
    pub icon: String,
    /// The generated (or fallback) alert message.
    pub message: String,
    /// The scenario's occurrence count at the time of generation.
    pub occurrence: u32,
    /// The urgency level derived from that occurrence count.
    pub urgency: UrgencyLevel,
    /// When the alert was generated.
    pub created_at: DateTime<Utc>,
}

impl AlertEntry {
    /// Build an entry for a freshly generated alert.
    #[must_use]
    pub fn new(scenario: &Scenario, message: String, occurrence: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            scenario_name: scenario.name.clone(),
            icon: scenario.icon.clone(),
            message,
            occurrence,
            urgency: UrgencyLevel::from_count(occurrence),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioCatalog;

    #[test]
    fn entry_carries_derived_urgency() {
        let catalog = ScenarioCatalog::builtin();
        let Some(scenario) = catalog.get("drowsy-driver") else {
            return;
        };
        let entry = AlertEntry::new(scenario, "Take a break soon.".to_owned(), 3);
        assert_eq!(entry.scenario_name, "Drowsy Driver");
        assert_eq!(entry.occurrence, 3);
        assert_eq!(entry.urgency, UrgencyLevel::Firm);
    }
}
