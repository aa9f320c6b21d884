//! Bar chart widget view model.

use godoksa_domain::age_group::AgeGroupTable;
use godoksa_domain::chart::{Bar, ChartGeometry, layout_bars};

use crate::card::CardClasses;
use crate::content::CHART_TITLE;

/// Bar fill color.
pub const BAR_FILL: &str = "#FF6384";

/// Age-group bar chart card. Static; no interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: &'static str,
    pub card: CardClasses,
    pub fill: &'static str,
    view_box: String,
    bars: Vec<Bar>,
}

impl ChartView {
    #[must_use]
    pub fn new(table: &AgeGroupTable) -> Self {
        let geometry = ChartGeometry::default();
        Self {
            title: CHART_TITLE,
            card: CardClasses::new(),
            fill: BAR_FILL,
            view_box: geometry.view_box(),
            bars: layout_bars(table, &geometry),
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn view_box(&self) -> &str {
        &self.view_box
    }
}
