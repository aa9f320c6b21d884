//! Headline counter — the single number shown at the top of the dashboard.

use crate::format::{PERSON_UNIT, group_thousands};

/// A single count of people with locale-style grouping on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineCounter {
    value: u64,
}

impl HeadlineCounter {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Replace the value. Nothing in the dashboard calls this yet; it is the
    /// hook for a live feed.
    pub fn set(&mut self, value: u64) {
        self.value = value;
    }

    /// Grouped value with the people unit, e.g. `1,234명`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{PERSON_UNIT}", group_thousands(self.value))
    }
}
