//! Dashboard service — composes the page from the three widgets.

use godoksa_domain::error::GodoksaError;

use crate::content::{FOOTER_ATTRIBUTION, PAGE_TITLE};
use crate::ports::StatsSource;
use crate::views::{ChartView, CounterView, MapView};

/// Everything needed to render the dashboard page once.
///
/// Widgets are independent: each owns its own state and none reads another's.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: &'static str,
    pub counter: CounterView,
    pub map: MapView,
    pub chart: ChartView,
    pub footer: &'static str,
}

/// Builds [`Dashboard`]s from a [`StatsSource`].
pub struct DashboardService<S> {
    source: S,
}

impl<S: StatsSource> DashboardService<S> {
    /// Create a new service reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build a fresh page with every widget in its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::Validation`] if the source serves an invalid
    /// table.
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> Result<Dashboard, GodoksaError> {
        let regions = self.source.regions()?;
        let age_groups = self.source.age_groups()?;
        let headline = self.source.headline();

        tracing::debug!(
            regions = regions.len(),
            age_groups = age_groups.len(),
            headline = headline.count,
            "building dashboard"
        );

        Ok(Dashboard {
            title: PAGE_TITLE,
            counter: CounterView::new(headline),
            map: MapView::new(regions),
            chart: ChartView::new(&age_groups),
            footer: FOOTER_ATTRIBUTION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline_stats::InlineStats;
    use crate::ports::HeadlineStat;
    use godoksa_domain::age_group::AgeGroupTable;
    use godoksa_domain::error::ValidationError;
    use godoksa_domain::region::{Region, RegionTable};

    struct EmptyAgeGroups;

    impl StatsSource for EmptyAgeGroups {
        fn regions(&self) -> Result<RegionTable, GodoksaError> {
            RegionTable::builder().region(Region::Seoul, 1, 1, 1).build()
        }

        fn age_groups(&self) -> Result<AgeGroupTable, GodoksaError> {
            AgeGroupTable::new(Vec::new())
        }

        fn headline(&self) -> HeadlineStat {
            HeadlineStat {
                count: 0,
                basis: String::new(),
            }
        }
    }

    #[test]
    fn should_compose_page_from_inline_stats() {
        let dashboard = DashboardService::new(InlineStats).build().unwrap();

        assert_eq!(dashboard.title, "고독사 현황 대시보드");
        assert_eq!(dashboard.counter.display(), "1,234명");
        assert_eq!(dashboard.map.markers().len(), 4);
        assert_eq!(dashboard.chart.bars().len(), 5);
        assert!(dashboard.footer.contains("보건복지부"));
    }

    #[test]
    fn should_build_identical_pages_from_identical_data() {
        let service = DashboardService::new(InlineStats);
        assert_eq!(service.build().unwrap(), service.build().unwrap());
    }

    #[test]
    fn should_start_map_without_selection() {
        let dashboard = DashboardService::new(InlineStats).build().unwrap();
        assert!(dashboard.map.detail().is_none());
    }

    #[test]
    fn should_keep_widget_state_independent() {
        let mut dashboard = DashboardService::new(InlineStats).build().unwrap();
        let counter_before = dashboard.counter.clone();
        let chart_before = dashboard.chart.clone();

        dashboard.map.select(Region::Busan);

        assert_eq!(dashboard.counter, counter_before);
        assert_eq!(dashboard.chart, chart_before);
    }

    #[test]
    fn should_propagate_invalid_source_table() {
        let result = DashboardService::new(EmptyAgeGroups).build();
        assert!(matches!(
            result,
            Err(GodoksaError::Validation(ValidationError::EmptyTable { .. }))
        ));
    }
}
