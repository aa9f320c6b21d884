//! Port definitions — traits that data sources implement.

pub mod stats_source;

pub use stats_source::{HeadlineStat, StatsSource};
