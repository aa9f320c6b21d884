//! Regions — administrative areas plotted on the map widget.

use std::fmt;
use std::str::FromStr;

use crate::error::{GodoksaError, NotFoundError, ValidationError};

/// One of the administrative regions the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Seoul,
    Gyeonggi,
    Busan,
    Daegu,
}

impl Region {
    /// Every region, in declaration order.
    pub const ALL: [Region; 4] = [Self::Seoul, Self::Gyeonggi, Self::Busan, Self::Daegu];

    /// Korean display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seoul => "서울",
            Self::Gyeonggi => "경기",
            Self::Busan => "부산",
            Self::Daegu => "대구",
        }
    }

    /// ASCII identifier, used for element ids and fragment anchors.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Seoul => "seoul",
            Self::Gyeonggi => "gyeonggi",
            Self::Busan => "busan",
            Self::Daegu => "daegu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = NotFoundError;

    /// Accepts either the Korean name or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.name() == s || region.slug() == s)
            .ok_or_else(|| NotFoundError {
                entity: "Region",
                key: s.to_string(),
            })
    }
}

/// Placement of a marker on the map canvas, in whole percent of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Upper bound for either axis.
    pub const MAX_PERCENT: u8 = 100;

    /// Build a position from percent offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PositionOutOfBounds`] if either axis is
    /// above 100%.
    pub fn new(x: u8, y: u8) -> Result<Self, ValidationError> {
        if x > Self::MAX_PERCENT || y > Self::MAX_PERCENT {
            return Err(ValidationError::PositionOutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x_percent(self) -> u8 {
        self.x
    }

    #[must_use]
    pub fn y_percent(self) -> u8 {
        self.y
    }

    /// Horizontal offset as a fraction of the canvas width, in `[0, 1]`.
    #[must_use]
    pub fn x_fraction(self) -> f64 {
        f64::from(self.x) / f64::from(Self::MAX_PERCENT)
    }

    /// Vertical offset as a fraction of the canvas height, in `[0, 1]`.
    #[must_use]
    pub fn y_fraction(self) -> f64 {
        f64::from(self.y) / f64::from(Self::MAX_PERCENT)
    }

    /// CSS `left` offset, e.g. `"42%"`.
    #[must_use]
    pub fn left(self) -> String {
        format!("{}%", self.x)
    }

    /// CSS `top` offset, e.g. `"30%"`.
    #[must_use]
    pub fn top(self) -> String {
        format!("{}%", self.y)
    }
}

/// Statistic for a single region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStat {
    pub region: Region,
    pub count: u32,
    pub position: Position,
}

/// Ordered set of region statistics; each region appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    rows: Vec<RegionStat>,
}

impl RegionTable {
    /// Create a builder for constructing a [`RegionTable`].
    #[must_use]
    pub fn builder() -> RegionTableBuilder {
        RegionTableBuilder::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionStat> {
        self.rows.iter()
    }

    /// Look up the row for `region`.
    #[must_use]
    pub fn get(&self, region: Region) -> Option<&RegionStat> {
        self.rows.iter().find(|row| row.region == region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a RegionStat;
    type IntoIter = std::slice::Iter<'a, RegionStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Step-by-step builder for [`RegionTable`]. Rows keep insertion order.
#[derive(Debug, Default)]
pub struct RegionTableBuilder {
    rows: Vec<(Region, u32, u8, u8)>,
}

impl RegionTableBuilder {
    /// Append a region with its count and percent placement.
    #[must_use]
    pub fn region(mut self, region: Region, count: u32, x: u8, y: u8) -> Self {
        self.rows.push((region, count, x, y));
        self
    }

    /// Consume the builder, validate, and return a [`RegionTable`].
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::Validation`] when the table is empty, a
    /// region repeats, or a position falls outside the canvas.
    pub fn build(self) -> Result<RegionTable, GodoksaError> {
        if self.rows.is_empty() {
            return Err(ValidationError::EmptyTable { table: "region" }.into());
        }

        let mut rows: Vec<RegionStat> = Vec::with_capacity(self.rows.len());
        for (region, count, x, y) in self.rows {
            if rows.iter().any(|row| row.region == region) {
                return Err(ValidationError::DuplicateRegion {
                    region: region.name(),
                }
                .into());
            }
            rows.push(RegionStat {
                region,
                count,
                position: Position::new(x, y)?,
            });
        }
        Ok(RegionTable { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_region_from_korean_name() {
        assert_eq!("부산".parse::<Region>().unwrap(), Region::Busan);
    }

    #[test]
    fn should_parse_region_from_slug() {
        assert_eq!("gyeonggi".parse::<Region>().unwrap(), Region::Gyeonggi);
    }

    #[test]
    fn should_return_not_found_when_region_is_unknown() {
        let err = "제주".parse::<Region>().unwrap_err();
        assert_eq!(err.entity, "Region");
        assert_eq!(err.key, "제주");
    }

    #[test]
    fn should_display_korean_name() {
        assert_eq!(Region::Daegu.to_string(), "대구");
    }

    #[test]
    fn should_format_position_as_css_percentages() {
        let position = Position::new(42, 30).unwrap();
        assert_eq!(position.left(), "42%");
        assert_eq!(position.top(), "30%");
    }

    #[test]
    fn should_expose_position_as_fractions() {
        let position = Position::new(50, 100).unwrap();
        assert!((position.x_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((position.y_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_canvas_corners() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(100, 100).is_ok());
    }

    #[test]
    fn should_reject_position_outside_canvas() {
        assert_eq!(
            Position::new(101, 20),
            Err(ValidationError::PositionOutOfBounds { x: 101, y: 20 })
        );
    }

    #[test]
    fn should_keep_insertion_order() {
        let table = RegionTable::builder()
            .region(Region::Daegu, 1, 10, 10)
            .region(Region::Seoul, 2, 20, 20)
            .build()
            .unwrap();

        let order: Vec<Region> = table.iter().map(|row| row.region).collect();
        assert_eq!(order, vec![Region::Daegu, Region::Seoul]);
    }

    #[test]
    fn should_return_validation_error_when_region_repeats() {
        let result = RegionTable::builder()
            .region(Region::Seoul, 1, 10, 10)
            .region(Region::Seoul, 2, 20, 20)
            .build();

        assert!(matches!(
            result,
            Err(GodoksaError::Validation(ValidationError::DuplicateRegion {
                region: "서울"
            }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_table_is_empty() {
        let result = RegionTable::builder().build();
        assert!(matches!(
            result,
            Err(GodoksaError::Validation(ValidationError::EmptyTable { .. }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_row_is_off_canvas() {
        let result = RegionTable::builder()
            .region(Region::Busan, 1, 65, 120)
            .build();
        assert!(matches!(
            result,
            Err(GodoksaError::Validation(
                ValidationError::PositionOutOfBounds { x: 65, y: 120 }
            ))
        ));
    }

    #[test]
    fn should_find_row_by_region() {
        let table = RegionTable::builder()
            .region(Region::Busan, 287, 65, 75)
            .build()
            .unwrap();

        assert_eq!(table.get(Region::Busan).map(|row| row.count), Some(287));
        assert!(table.get(Region::Seoul).is_none());
    }
}
