//! Map selection — which region's detail panel is showing.

use crate::region::Region;

/// Selection state of the map widget.
///
/// Starts at [`NoSelection`](Self::NoSelection). Once a region is selected
/// there is no way back; later selections only replace the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapSelection {
    #[default]
    NoSelection,
    Selected(Region),
}

impl MapSelection {
    /// Select `region`, replacing any previous selection.
    pub fn select(&mut self, region: Region) {
        *self = Self::Selected(region);
    }

    #[must_use]
    pub fn selected(&self) -> Option<Region> {
        match self {
            Self::NoSelection => None,
            Self::Selected(region) => Some(*region),
        }
    }
}
