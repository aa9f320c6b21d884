//! Stats port — where the dashboard's tables come from.

use godoksa_domain::age_group::AgeGroupTable;
use godoksa_domain::error::GodoksaError;
use godoksa_domain::region::RegionTable;

/// The headline number and the period it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineStat {
    pub count: u64,
    pub basis: String,
}

/// Supplies the statistics rendered on the dashboard.
///
/// Calls are synchronous: sources are in-process tables, never IO.
pub trait StatsSource {
    /// Per-region counts and marker placement.
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::Validation`] if the table violates its invariants.
    fn regions(&self) -> Result<RegionTable, GodoksaError>;

    /// Per-age-bracket counts, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::Validation`] if the table violates its invariants.
    fn age_groups(&self) -> Result<AgeGroupTable, GodoksaError>;

    /// Headline counter value.
    fn headline(&self) -> HeadlineStat;
}
