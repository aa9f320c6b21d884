//! Color tiers — discrete severity buckets for a region count.

/// Counts strictly above this are [`ColorTier::Tier4`].
pub const TIER4_ABOVE: u32 = 500;
/// Counts strictly above this are at least [`ColorTier::Tier3`].
pub const TIER3_ABOVE: u32 = 300;
/// Counts strictly above this are at least [`ColorTier::Tier2`].
pub const TIER2_ABOVE: u32 = 200;

/// Severity bucket used to color a region marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
}

impl ColorTier {
    /// Bucket a count. The first matching threshold, highest first, wins.
    #[must_use]
    pub const fn from_count(count: u32) -> Self {
        if count > TIER4_ABOVE {
            Self::Tier4
        } else if count > TIER3_ABOVE {
            Self::Tier3
        } else if count > TIER2_ABOVE {
            Self::Tier2
        } else {
            Self::Tier1
        }
    }

    /// Stylesheet class applied to the marker.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Tier1 => "tier-1",
            Self::Tier2 => "tier-2",
            Self::Tier3 => "tier-3",
            Self::Tier4 => "tier-4",
        }
    }

    /// Marker fill color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Tier1 => "#86efac",
            Self::Tier2 => "#fde047",
            Self::Tier3 => "#fb923c",
            Self::Tier4 => "#ef4444",
        }
    }
}
