//! Counter widget view model.

use godoksa_domain::counter::HeadlineCounter;

use crate::card::CardClasses;
use crate::content::COUNTER_TITLE;
use crate::ports::HeadlineStat;

/// Headline counter card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub title: &'static str,
    /// Reference period shown beside the title.
    pub basis: String,
    pub card: CardClasses,
    counter: HeadlineCounter,
}

impl CounterView {
    #[must_use]
    pub fn new(headline: HeadlineStat) -> Self {
        Self {
            title: COUNTER_TITLE,
            basis: headline.basis,
            card: CardClasses::new()
                .with_class("card--alert")
                .with_title("card-title--split"),
            counter: HeadlineCounter::new(headline.count),
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.counter.value()
    }

    /// Update the displayed value. Not wired to any input.
    pub fn set_value(&mut self, value: u64) {
        self.counter.set(value);
    }

    /// Grouped value with unit, e.g. `1,234명`.
    #[must_use]
    pub fn display(&self) -> String {
        self.counter.display()
    }
}
