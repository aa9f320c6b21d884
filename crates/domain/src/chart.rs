//! Bar chart geometry — turns an [`AgeGroupTable`] into positioned SVG bars.
//!
//! All coordinates are in SVG user units with the origin at the top-left, so a
//! bar grows upward from the baseline at `y = height`.

use crate::age_group::AgeGroupTable;

/// Fixed layout constants for the age-group chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Drawing width.
    pub width: f64,
    /// Baseline position; also the nominal drawing height.
    pub height: f64,
    /// Headroom above the tallest bar, reserved for its value label.
    pub top_margin: f64,
    /// Horizontal distance between consecutive bars.
    pub slot_width: f64,
    /// Left edge of the first bar.
    pub slot_offset: f64,
    pub bar_width: f64,
    /// Gap between a bar's top and its value label.
    pub value_label_gap: f64,
    /// Distance of category labels below the baseline.
    pub category_label_drop: f64,
    /// Extra view box height that keeps category labels visible.
    pub label_band: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            top_margin: 100.0,
            slot_width: 100.0,
            slot_offset: 50.0,
            bar_width: 50.0,
            value_label_gap: 10.0,
            category_label_drop: 20.0,
            label_band: 30.0,
        }
    }
}

impl ChartGeometry {
    /// Height reached by the bar holding the maximum count.
    #[must_use]
    pub fn max_bar_height(&self) -> f64 {
        self.height - self.top_margin
    }

    /// SVG `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height + self.label_band)
    }
}

/// A text label anchored at its horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One positioned bar with its two labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub count: u32,
    /// Count printed above the bar.
    pub value_label: ChartLabel,
    /// Bracket name printed below the baseline.
    pub category_label: ChartLabel,
}

/// Lay out one bar per row, heights normalized against the largest count.
///
/// A table whose counts are all zero yields zero-height bars.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_bars(table: &AgeGroupTable, geometry: &ChartGeometry) -> Vec<Bar> {
    let max = f64::from(table.max_count());

    table
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let height = if max > 0.0 {
                f64::from(row.count) / max * geometry.max_bar_height()
            } else {
                0.0
            };
            let x = index as f64 * geometry.slot_width + geometry.slot_offset;
            let y = geometry.height - height;
            let center = x + geometry.bar_width / 2.0;

            Bar {
                x,
                y,
                width: geometry.bar_width,
                height,
                count: row.count,
                value_label: ChartLabel {
                    x: center,
                    y: y - geometry.value_label_gap,
                    text: row.count.to_string(),
                },
                category_label: ChartLabel {
                    x: center,
                    y: geometry.height + geometry.category_label_drop,
                    text: row.label.clone(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age_group::AgeGroupStat;

    fn table(counts: &[u32]) -> AgeGroupTable {
        AgeGroupTable::new(
            counts
                .iter()
                .enumerate()
                .map(|(i, count)| AgeGroupStat {
                    label: format!("g{i}"),
                    count: *count,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn should_give_max_entry_the_full_bar_height() {
        let bars = layout_bars(&table(&[120, 210, 350, 480, 640]), &ChartGeometry::default());
        let tallest = &bars[4];
        assert!((tallest.height - 200.0).abs() < f64::EPSILON);
        assert!((tallest.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_scale_other_bars_proportionally() {
        let bars = layout_bars(&table(&[120, 210, 350, 480, 640]), &ChartGeometry::default());
        assert!((bars[0].height - 37.5).abs() < 1e-9);
        assert!((bars[0].height / bars[4].height - 120.0 / 640.0).abs() < 1e-9);
        for bar in &bars[..4] {
            assert!(bar.height < bars[4].height);
        }
    }

    #[test]
    fn should_place_bars_in_fixed_slots() {
        let bars = layout_bars(&table(&[1, 2, 3]), &ChartGeometry::default());
        let xs: Vec<f64> = bars.iter().map(|bar| bar.x).collect();
        assert_eq!(xs, vec![50.0, 150.0, 250.0]);
    }

    #[test]
    fn should_anchor_bars_on_the_baseline() {
        let geometry = ChartGeometry::default();
        for bar in layout_bars(&table(&[5, 10]), &geometry) {
            assert!((bar.y + bar.height - geometry.height).abs() < 1e-9);
        }
    }

    #[test]
    fn should_place_labels_around_the_bar() {
        let bars = layout_bars(&table(&[640]), &ChartGeometry::default());
        let bar = &bars[0];
        assert_eq!(bar.value_label.text, "640");
        assert!((bar.value_label.x - 75.0).abs() < f64::EPSILON);
        assert!((bar.value_label.y - 90.0).abs() < f64::EPSILON);
        assert_eq!(bar.category_label.text, "g0");
        assert!((bar.category_label.y - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_render_flat_chart_when_all_counts_are_zero() {
        let bars = layout_bars(&table(&[0, 0]), &ChartGeometry::default());
        assert!(bars.iter().all(|bar| bar.height.abs() < f64::EPSILON));
    }

    #[test]
    fn should_include_label_band_in_view_box() {
        assert_eq!(ChartGeometry::default().view_box(), "0 0 500 330");
    }
}
