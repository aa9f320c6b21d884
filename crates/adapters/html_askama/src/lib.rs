//! # godoksa-adapter-html-askama
//!
//! Static HTML adapter built on [askama](https://docs.rs/askama).
//!
//! ## Responsibilities
//! - Render a [`Dashboard`](godoksa_app::services::dashboard_service::Dashboard)
//!   into one self-contained HTML document with the stylesheet inlined
//! - Work with **zero JavaScript**: region markers are fragment links and
//!   each region's detail panel is shown through the CSS `:target` selector,
//!   so at most one panel is visible and a new click replaces it
//!
//! ## Dependency rule
//! Depends on `godoksa-app` for view models. Never leaks askama types into
//! the application layer.

pub mod error;
pub mod page;

pub use error::RenderError;
pub use page::render_page;
