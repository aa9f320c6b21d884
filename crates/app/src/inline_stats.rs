//! In-process [`StatsSource`] backed by the literal seed tables.

use godoksa_domain::age_group::AgeGroupTable;
use godoksa_domain::error::GodoksaError;
use godoksa_domain::region::RegionTable;
use godoksa_domain::seed;

use crate::ports::{HeadlineStat, StatsSource};

/// Serves the statistics compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStats;

impl StatsSource for InlineStats {
    fn regions(&self) -> Result<RegionTable, GodoksaError> {
        seed::regions()
    }

    fn age_groups(&self) -> Result<AgeGroupTable, GodoksaError> {
        seed::age_groups()
    }

    fn headline(&self) -> HeadlineStat {
        HeadlineStat {
            count: seed::HEADLINE_COUNT,
            basis: seed::HEADLINE_BASIS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serve_seeded_headline() {
        let headline = InlineStats.headline();
        assert_eq!(headline.count, 1234);
        assert_eq!(headline.basis, "2024년 기준");
    }

    #[test]
    fn should_serve_valid_tables() {
        assert_eq!(InlineStats.regions().unwrap().len(), 4);
        assert_eq!(InlineStats.age_groups().unwrap().len(), 5);
    }
}
