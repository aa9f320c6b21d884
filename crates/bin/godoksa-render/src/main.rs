//! # godoksa-render
//!
//! Composition root that builds the dashboard and writes it as a static page.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` with the configured filter
//! - Construct the stats source and the dashboard service
//! - Render the page through the askama adapter and write it to disk
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::Path;

use anyhow::Context;
use godoksa_adapter_html_askama::render_page;
use godoksa_app::inline_stats::InlineStats;
use godoksa_app::services::dashboard_service::DashboardService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let dashboard = DashboardService::new(InlineStats)
        .build()
        .context("failed to build dashboard")?;
    let html = render_page(&dashboard).context("failed to render dashboard page")?;

    write_page(&config.output.path, &html)?;
    tracing::info!(
        path = %config.output.path.display(),
        bytes = html.len(),
        "dashboard written"
    );

    Ok(())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}
