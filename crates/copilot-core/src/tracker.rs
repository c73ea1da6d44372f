//! Per-scenario occurrence counting and urgency derivation.

use std::collections::BTreeMap;

use copilot_types::UrgencyLevel;

/// Tracks how often each scenario has been triggered in this session.
///
/// Counts start at zero, are incremented by exactly one per trigger, and
/// are never decremented or reset while the session lives. Urgency is a
/// pure function of the count, so it can only escalate.
#[derive(Debug, Clone, Default)]
pub struct EscalationTracker {
    counts: BTreeMap<String, u32>,
}

impl EscalationTracker {
    /// Create an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one occurrence of `scenario_name` and return the new count.
    ///
    /// Initializes the count to zero first if the scenario has never been
    /// seen. Saturates at `u32::MAX`, which no session will ever reach.
    pub fn record(&mut self, scenario_name: &str) -> u32 {
        let count = self
            .counts
            .entry(scenario_name.to_owned())
            .or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// The current occurrence count for `scenario_name` (0 if never seen).
    #[must_use]
    pub fn count(&self, scenario_name: &str) -> u32 {
        self.counts.get(scenario_name).copied().unwrap_or(0)
    }

    /// The urgency level derived from the current count.
    ///
    /// Read-only: querying never changes the count.
    #[must_use]
    pub fn urgency_for(&self, scenario_name: &str) -> UrgencyLevel {
        UrgencyLevel::from_count(self.count(scenario_name))
    }

    /// Iterate every triggered scenario and its count, in name order.
    ///
    /// Scenarios that were never triggered do not appear.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_strictly_increasing() {
        let mut tracker = EscalationTracker::new();
        for expected in 1..=6 {
            assert_eq!(tracker.record("Left Turn"), expected);
        }
        assert_eq!(tracker.count("Left Turn"), 6);
    }

    #[test]
    fn scenarios_are_independent() {
        let mut tracker = EscalationTracker::new();
        tracker.record("Left Turn");
        tracker.record("Left Turn");
        tracker.record("Drowsy Driver");

        assert_eq!(tracker.count("Left Turn"), 2);
        assert_eq!(tracker.count("Drowsy Driver"), 1);
        assert_eq!(tracker.count("Rainy Weather"), 0);
    }

    #[test]
    fn urgency_follows_threshold_table() {
        let mut tracker = EscalationTracker::new();
        assert_eq!(tracker.urgency_for("Left Turn"), UrgencyLevel::Calm);

        let expected = [
            UrgencyLevel::Calm,
            UrgencyLevel::Moderate,
            UrgencyLevel::Firm,
            UrgencyLevel::Critical,
            UrgencyLevel::Critical,
        ];
        for level in expected {
            tracker.record("Left Turn");
            assert_eq!(tracker.urgency_for("Left Turn"), level);
        }
    }

    #[test]
    fn counts_lists_only_triggered_scenarios() {
        let mut tracker = EscalationTracker::new();
        assert_eq!(tracker.counts().count(), 0);

        tracker.record("Left Turn");
        tracker.record("Left Turn");
        tracker.record("Drowsy Driver");

        let counts: Vec<(&str, u32)> = tracker.counts().collect();
        assert_eq!(counts, vec![("Drowsy Driver", 1), ("Left Turn", 2)]);
    }

    #[test]
    fn urgency_query_has_no_side_effects() {
        let mut tracker = EscalationTracker::new();
        tracker.record("Pedestrian Crossing");
        let before = tracker.count("Pedestrian Crossing");
        let _ = tracker.urgency_for("Pedestrian Crossing");
        let _ = tracker.urgency_for("Pedestrian Crossing");
        assert_eq!(tracker.count("Pedestrian Crossing"), before);
    }
}
