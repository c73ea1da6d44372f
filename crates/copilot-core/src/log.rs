//! The bounded log of recently issued alerts.

use std::collections::VecDeque;

use copilot_types::AlertEntry;

/// Maximum number of alert entries retained by the log.
pub const ALERT_LOG_CAPACITY: usize = 5;

/// How many recent messages are handed to the generator as context so it
/// can avoid repeating phrasing.
pub const PROMPT_CONTEXT_WINDOW: usize = 3;

/// Fixed-capacity FIFO of the most recent alerts.
///
/// Stored oldest-first; index 0 is the oldest of the retained window.
/// Presentation iterates newest-first via [`AlertLog::iter_newest_first`].
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    entries: VecDeque<AlertEntry>,
}

impl AlertLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append an entry, evicting the oldest once the capacity is exceeded.
    pub fn push(&mut self, entry: AlertEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > ALERT_LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Up to the `n` most recent message texts, oldest-first.
    ///
    /// This is the context window passed to the alert generator.
    #[must_use]
    pub fn recent_messages(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries
            .iter()
            .skip(skip)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Iterate entries oldest-first (storage order).
    pub fn entries(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter()
    }

    /// Iterate entries newest-first (presentation order).
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter().rev()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
