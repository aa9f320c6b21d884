//! Literal statistics published on the dashboard.

use crate::age_group::{AgeGroupStat, AgeGroupTable};
use crate::error::GodoksaError;
use crate::region::{Region, RegionTable};

/// Headline count of solitary deaths.
pub const HEADLINE_COUNT: u64 = 1234;

/// Reference period for [`HEADLINE_COUNT`].
pub const HEADLINE_BASIS: &str = "2024년 기준";

const AGE_GROUPS: [(&str, u32); 5] = [
    ("65-70세", 120),
    ("70-75세", 210),
    ("75-80세", 350),
    ("80-85세", 480),
    ("85세 이상", 640),
];

/// Per-region counts with hand-placed map positions.
///
/// # Errors
///
/// Propagates [`RegionTable`] validation; the literal rows are valid.
pub fn regions() -> Result<RegionTable, GodoksaError> {
    RegionTable::builder()
        .region(Region::Seoul, 342, 42, 30)
        .region(Region::Gyeonggi, 512, 40, 25)
        .region(Region::Busan, 287, 65, 75)
        .region(Region::Daegu, 201, 55, 60)
        .build()
}

/// Per-bracket counts in ascending age order.
///
/// # Errors
///
/// Propagates [`AgeGroupTable`] validation; the literal rows are valid.
pub fn age_groups() -> Result<AgeGroupTable, GodoksaError> {
    AgeGroupTable::new(
        AGE_GROUPS
            .iter()
            .map(|(label, count)| AgeGroupStat {
                label: (*label).to_string(),
                count: *count,
            })
            .collect(),
    )
}
