//! Age-group statistics shown in the bar chart.

use crate::error::{GodoksaError, ValidationError};

/// Count for one age bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroupStat {
    pub label: String,
    pub count: u32,
}

/// Non-empty sequence of age brackets in ascending age order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroupTable {
    rows: Vec<AgeGroupStat>,
}

impl AgeGroupTable {
    /// Validate and wrap `rows`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::Validation`] when `rows` is empty or a label is
    /// blank.
    pub fn new(rows: Vec<AgeGroupStat>) -> Result<Self, GodoksaError> {
        if rows.is_empty() {
            return Err(ValidationError::EmptyTable { table: "age group" }.into());
        }
        if rows.iter().any(|row| row.label.trim().is_empty()) {
            return Err(ValidationError::EmptyLabel.into());
        }
        Ok(Self { rows })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgeGroupStat> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest count in the table.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count).max().unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a AgeGroupTable {
    type Item = &'a AgeGroupStat;
    type IntoIter = std::slice::Iter<'a, AgeGroupStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(label: &str, count: u32) -> AgeGroupStat {
        AgeGroupStat {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn should_report_max_count() {
        let table = AgeGroupTable::new(vec![stat("a", 3), stat("b", 9), stat("c", 4)]).unwrap();
        assert_eq!(table.max_count(), 9);
    }

    #[test]
    fn should_preserve_row_order() {
        let table = AgeGroupTable::new(vec![stat("young", 1), stat("old", 2)]).unwrap();
        let labels: Vec<&str> = table.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["young", "old"]);
    }

    #[test]
    fn should_return_validation_error_when_empty() {
        assert!(matches!(
            AgeGroupTable::new(Vec::new()),
            Err(GodoksaError::Validation(ValidationError::EmptyTable { .. }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_label_is_blank() {
        assert!(matches!(
            AgeGroupTable::new(vec![stat("  ", 1)]),
            Err(GodoksaError::Validation(ValidationError::EmptyLabel))
        ));
    }
}
