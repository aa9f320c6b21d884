//! # godoksa-domain
//!
//! Pure domain model for the solitary-death (고독사) statistics dashboard.
//!
//! ## Responsibilities
//! - Define **regions** with their counts and hand-placed map positions
//! - Define **age groups** in ascending bracket order
//! - Bucket counts into **color tiers**
//! - Lay out the age-group **bar chart** geometry
//! - Hold the **headline counter** and the **map selection** state machine
//! - Provide the **seeded** literal tables the dashboard publishes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! The data source boundary is expressed as a trait in the `app` crate.

pub mod error;
pub mod format;

pub mod age_group;
pub mod chart;
pub mod counter;
pub mod region;
pub mod seed;
pub mod selection;
pub mod tier;
