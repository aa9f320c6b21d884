//! # godoksa-app
//!
//! Application layer — view models and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`StatsSource` port** that supplies the literal tables
//! - Provide the in-process **`InlineStats`** source backed by the seed tables
//! - Define the **Card primitive** (slot class composition) shared by every
//!   renderer
//! - Build per-widget **view models** (`CounterView`, `MapView`, `ChartView`)
//!   that own each widget's local state and its update functions
//! - Compose the full page through **`DashboardService`**
//!
//! ## Dependency rule
//! Depends on `godoksa-domain` only. Never imports adapter crates; renderers
//! depend on *this* crate, not the reverse.

pub mod card;
pub mod content;
pub mod inline_stats;
pub mod ports;
pub mod services;
pub mod views;
