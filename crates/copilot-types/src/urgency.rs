//! The urgency scale for adaptive alerts.
//!
//! Urgency is never stored independently -- it is always derived from a
//! scenario's occurrence count within the current session, so it can only
//! move up the scale as the count grows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How insistent an alert should be.
///
/// Derived from the occurrence count of a scenario via
/// [`UrgencyLevel::from_count`]. The ordering of the variants matches the
/// escalation order, so `Calm < Moderate < Firm < Critical` holds for the
/// derived `Ord` implementation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum UrgencyLevel {
    /// First occurrence: gentle, conversational, non-alarming.
    Calm,
    /// Second occurrence: more direct, emphasizes attention.
    Moderate,
    /// Third occurrence: serious, names the repeated pattern.
    Firm,
    /// Fourth and later occurrences: urgent, recommends corrective action.
    Critical,
}

impl UrgencyLevel {
    /// Derive the urgency level from an occurrence count.
    ///
    /// A count of 0 (scenario never triggered) maps to [`Self::Calm`] by
    /// convention so the function is total. Once a threshold is reached the
    /// level never regresses, because counts only grow within a session.
    #[must_use]
    pub const fn from_count(count: u32) -> Self {
        match count {
            0 | 1 => Self::Calm,
            2 => Self::Moderate,
            3 => Self::Firm,
            _ => Self::Critical,
        }
    }

    /// The lowercase label used in prompts and API payloads.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Moderate => "moderate",
            Self::Firm => "firm",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_table() {
        assert_eq!(UrgencyLevel::from_count(0), UrgencyLevel::Calm);
        assert_eq!(UrgencyLevel::from_count(1), UrgencyLevel::Calm);
        assert_eq!(UrgencyLevel::from_count(2), UrgencyLevel::Moderate);
        assert_eq!(UrgencyLevel::from_count(3), UrgencyLevel::Firm);
        assert_eq!(UrgencyLevel::from_count(4), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_count(100), UrgencyLevel::Critical);
    }

    #[test]
    fn monotone_in_count() {
        let mut previous = UrgencyLevel::from_count(0);
        for count in 1..20 {
            let level = UrgencyLevel::from_count(count);
            assert!(level >= previous, "urgency regressed at count {count}");
            previous = level;
        }
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(UrgencyLevel::Calm.label(), "calm");
        assert_eq!(UrgencyLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&UrgencyLevel::Firm).unwrap_or_default();
        assert_eq!(json, "\"firm\"");
    }
}
