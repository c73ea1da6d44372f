//! The per-user session object.
//!
//! One session owns the scenario history, the bounded alert log, and the
//! current alert pointer. Trigger handling is request/response: the caller
//! begins a trigger to learn the new occurrence count and urgency, asks the
//! generator for a message, then commits the finished entry. The generator
//! itself never mutates session state.

use copilot_types::{AlertEntry, Scenario, UrgencyLevel};

use crate::log::{AlertLog, PROMPT_CONTEXT_WINDOW};
use crate::tracker::EscalationTracker;

/// The result of recording one trigger, before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOutcome {
    /// The scenario's new occurrence count.
    pub occurrence: u32,
    /// The urgency level derived from that count.
    pub urgency: UrgencyLevel,
}

/// Session-scoped state for a single user's interaction.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tracker: EscalationTracker,
    log: AlertLog,
    current: Option<AlertEntry>,
}

impl Session {
    /// Create a fresh session with empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tracker: EscalationTracker::new(),
            log: AlertLog::new(),
            current: None,
        }
    }

    /// Record one occurrence of `scenario` and return the new count and
    /// derived urgency.
    pub fn begin_trigger(&mut self, scenario: &Scenario) -> TriggerOutcome {
        let occurrence = self.tracker.record(&scenario.name);
        TriggerOutcome {
            occurrence,
            urgency: UrgencyLevel::from_count(occurrence),
        }
    }

    /// The recent alert messages handed to the generator as context.
    ///
    /// Drawn from the shared running log, not per scenario, oldest-first.
    #[must_use]
    pub fn recent_messages(&self) -> Vec<String> {
        self.log.recent_messages(PROMPT_CONTEXT_WINDOW)
    }

    /// Commit a finished alert: set it as current and append it to the log.
    pub fn commit(&mut self, entry: AlertEntry) {
        self.current = Some(entry.clone());
        self.log.push(entry);
    }

    /// The most recently committed alert, if any.
    #[must_use]
    pub const fn current_alert(&self) -> Option<&AlertEntry> {
        self.current.as_ref()
    }

    /// The bounded alert log.
    #[must_use]
    pub const fn log(&self) -> &AlertLog {
        &self.log
    }

    /// The escalation tracker (read access for display).
    #[must_use]
    pub const fn tracker(&self) -> &EscalationTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_types::ScenarioCatalog;

    /// End-to-end escalation through the session with a stub generation
    /// step that echoes the urgency label as the message.
    #[test]
    fn four_triggers_escalate_and_log_in_order() {
        let catalog = ScenarioCatalog::builtin();
        let Some(scenario) = catalog.get("left-turn") else {
            return;
        };
        let mut session = Session::new();

        let expected = [
            (1, UrgencyLevel::Calm),
            (2, UrgencyLevel::Moderate),
            (3, UrgencyLevel::Firm),
            (4, UrgencyLevel::Critical),
        ];

        for (occurrence, urgency) in expected {
            let outcome = session.begin_trigger(scenario);
            assert_eq!(outcome.occurrence, occurrence);
            assert_eq!(outcome.urgency, urgency);

            // Stub generator: the message is just the urgency label.
            let message = outcome.urgency.label().to_owned();
            session.commit(AlertEntry::new(scenario, message, outcome.occurrence));
        }

        // The log holds exactly these four entries in insertion order.
        let logged: Vec<(u32, &str)> = session
            .log()
            .entries()
            .map(|e| (e.occurrence, e.message.as_str()))
            .collect();
        assert_eq!(
            logged,
            vec![(1, "calm"), (2, "moderate"), (3, "firm"), (4, "critical")],
        );

        let current = session.current_alert();
        assert!(current.is_some(), "current alert should be set");
        if let Some(entry) = current {
            assert_eq!(entry.message, "critical");
            assert_eq!(entry.occurrence, 4);
        }
    }

    #[test]
    fn recent_messages_come_from_the_shared_log() {
        let catalog = ScenarioCatalog::builtin();
        let Some(left) = catalog.get("left-turn") else {
            return;
        };
        let Some(drowsy) = catalog.get("drowsy-driver") else {
            return;
        };
        let mut session = Session::new();

        let first = session.begin_trigger(left);
        session.commit(AlertEntry::new(left, "watch the turn".to_owned(), first.occurrence));
        let second = session.begin_trigger(drowsy);
        session.commit(AlertEntry::new(drowsy, "stay awake".to_owned(), second.occurrence));

        // Context is the running log across scenarios, oldest-first.
        assert_eq!(
            session.recent_messages(),
            vec!["watch the turn", "stay awake"],
        );
    }

    #[test]
    fn commit_does_not_touch_the_tracker() {
        let catalog = ScenarioCatalog::builtin();
        let Some(scenario) = catalog.get("rainy-weather") else {
            return;
        };
        let mut session = Session::new();

        let outcome = session.begin_trigger(scenario);
        session.commit(AlertEntry::new(scenario, "slow down".to_owned(), outcome.occurrence));
        session.commit(AlertEntry::new(scenario, "still raining".to_owned(), outcome.occurrence));

        // Only begin_trigger increments the count.
        assert_eq!(session.tracker().count(&scenario.name), 1);
    }
}
