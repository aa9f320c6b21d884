//! Widget view models.
//!
//! Each view model holds the render-ready data for one widget plus that
//! widget's local state. State changes only through the methods defined here.

pub mod chart;
pub mod counter;
pub mod map;

pub use chart::ChartView;
pub use counter::CounterView;
pub use map::{MapView, Marker, RegionDetail};
