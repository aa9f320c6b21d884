//! Map widget view model — region markers plus the selected-region panel.

use godoksa_domain::error::{GodoksaError, NotFoundError};
use godoksa_domain::format::people;
use godoksa_domain::region::{Region, RegionStat, RegionTable};
use godoksa_domain::selection::MapSelection;
use godoksa_domain::tier::ColorTier;

use crate::card::CardClasses;
use crate::content::{MAP_TITLE, region_heading};

/// A clickable badge for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub region: Region,
    pub name: &'static str,
    pub count: u32,
    /// Text inside the badge: the raw count.
    pub label: String,
    pub tier: ColorTier,
    /// CSS `left` offset, e.g. `42%`.
    pub left: String,
    /// CSS `top` offset.
    pub top: String,
    /// Element id of the region's detail panel.
    pub anchor: String,
}

impl Marker {
    fn from_stat(stat: &RegionStat) -> Self {
        Self {
            region: stat.region,
            name: stat.region.name(),
            count: stat.count,
            label: stat.count.to_string(),
            tier: ColorTier::from_count(stat.count),
            left: stat.position.left(),
            top: stat.position.top(),
            anchor: anchor(stat.region),
        }
    }

    /// Class list for the badge element.
    #[must_use]
    pub fn class(&self) -> String {
        format!("marker {}", self.tier.css_class())
    }

    /// Inline style placing the badge on the canvas.
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}; top: {};", self.left, self.top)
    }
}

/// Content of the panel shown under the map for a selected region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDetail {
    pub region: Region,
    pub anchor: String,
    pub heading: String,
    pub count_text: String,
    /// Whether this panel belongs to the current selection.
    pub selected: bool,
}

impl RegionDetail {
    /// Class list for the panel element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected {
            "region-detail region-detail--selected"
        } else {
            "region-detail"
        }
    }
}

fn anchor(region: Region) -> String {
    format!("region-{}", region.slug())
}

/// Regional map card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapView {
    pub title: &'static str,
    pub card: CardClasses,
    regions: RegionTable,
    markers: Vec<Marker>,
    selection: MapSelection,
}

impl MapView {
    #[must_use]
    pub fn new(regions: RegionTable) -> Self {
        let markers = regions.iter().map(Marker::from_stat).collect();
        Self {
            title: MAP_TITLE,
            card: CardClasses::new()
                .with_class("card--wide")
                .with_content("card-content--relative"),
            regions,
            markers,
            selection: MapSelection::default(),
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn selection(&self) -> MapSelection {
        self.selection
    }

    /// Handle a click on `region`'s marker.
    pub fn select(&mut self, region: Region) {
        self.selection.select(region);
        tracing::debug!(region = region.name(), "region selected");
    }

    /// Select by Korean name or slug.
    ///
    /// # Errors
    ///
    /// Returns [`GodoksaError::NotFound`] when `name` matches no region on
    /// this map. The selection is left unchanged.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), GodoksaError> {
        let region: Region = name.parse()?;
        if self.regions.get(region).is_none() {
            return Err(NotFoundError {
                entity: "Region",
                key: name.to_string(),
            }
            .into());
        }
        self.select(region);
        Ok(())
    }

    /// Panel for the current selection; `None` until a marker is clicked.
    #[must_use]
    pub fn detail(&self) -> Option<RegionDetail> {
        self.selection
            .selected()
            .and_then(|region| self.detail_for(region))
    }

    /// Panel content for `region`, whether or not it is selected.
    #[must_use]
    pub fn detail_for(&self, region: Region) -> Option<RegionDetail> {
        self.regions.get(region).map(|stat| RegionDetail {
            region,
            anchor: anchor(region),
            heading: region_heading(region.name()),
            count_text: people(stat.count),
            selected: self.selection.selected() == Some(region),
        })
    }

    /// Panel content for every region, in marker order.
    #[must_use]
    pub fn details(&self) -> Vec<RegionDetail> {
        self.regions
            .iter()
            .filter_map(|stat| self.detail_for(stat.region))
            .collect()
    }
}
