//! Driving scenario definitions and the built-in catalog.
//!
//! Scenarios are a static, predefined set. The catalog is immutable at
//! runtime and is the only source of trigger inputs, so there is no
//! user-supplied data to validate beyond the scenario id lookup.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A predefined driving situation the user can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Scenario {
    /// Stable slug used in API paths (e.g. `left-turn`).
    pub id: String,
    /// Display name (e.g. `Left Turn`).
    pub name: String,
    /// Human-readable description fed to the alert generator.
    pub description: String,
    /// Icon shown next to the scenario and its alerts.
    pub icon: String,
}

impl Scenario {
    /// Construct a scenario from static catalog data.
    fn from_parts(id: &str, name: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

/// The immutable set of scenarios offered to the user.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// The built-in catalog of five driving scenarios.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            scenarios: vec![
                Scenario::from_parts(
                    "left-turn",
                    "Left Turn",
                    "Driver preparing to make a left turn at an intersection",
                    "\u{1f697}",
                ),
                Scenario::from_parts(
                    "distracted-driver",
                    "Distracted Driver",
                    "Driver showing signs of distraction (phone, dashboard, etc.)",
                    "\u{1f6a6}",
                ),
                Scenario::from_parts(
                    "rainy-weather",
                    "Rainy Weather",
                    "Driving in poor weather conditions with reduced visibility",
                    "\u{1f327}\u{fe0f}",
                ),
                Scenario::from_parts(
                    "pedestrian-crossing",
                    "Pedestrian Crossing",
                    "Pedestrian detected near or in crosswalk",
                    "\u{1f6b6}",
                ),
                Scenario::from_parts(
                    "drowsy-driver",
                    "Drowsy Driver",
                    "Driver showing signs of fatigue or drowsiness",
                    "\u{1f634}",
                ),
            ],
        }
    }

    /// Look up a scenario by its slug.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// All scenarios in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog is empty (never true for the built-in catalog).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_five_scenarios() {
        let catalog = ScenarioCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup_by_slug() {
        let catalog = ScenarioCatalog::builtin();
        let scenario = catalog.get("left-turn");
        assert!(scenario.is_some(), "left-turn should exist");
        if let Some(s) = scenario {
            assert_eq!(s.name, "Left Turn");
        }
        assert!(catalog.get("warp-drive").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        let catalog = ScenarioCatalog::builtin();
        let mut ids: Vec<&str> = catalog.all().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
