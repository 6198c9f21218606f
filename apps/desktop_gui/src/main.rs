//! Desktop GUI bootstrap: CLI options, logging, seed load, eframe run.

mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use catalog_core::CatalogState;
use clap::Parser;
use eframe::egui;
use shared::Hero;
use tracing::info;

use crate::ui::HeroCatalogApp;

#[derive(Debug, Parser)]
#[command(name = "hero-catalog", about = "Searchable super-hero catalog page")]
struct StartupConfig {
    /// Alternate seed file; the bundled catalog is used when absent.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Log filter, e.g. "info" or "catalog_core=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn load_catalog(startup: &StartupConfig) -> anyhow::Result<Vec<Hero>> {
    match &startup.seed {
        Some(path) => catalog_core::catalog_from_path(path)
            .with_context(|| format!("failed to load seed file {}", path.display())),
        None => catalog_core::bundled_catalog().context("failed to load bundled seed data"),
    }
}

fn main() -> anyhow::Result<()> {
    let startup = StartupConfig::parse();
    tracing_subscriber::fmt()
        .with_env_filter(startup.log_filter.as_str())
        .init();

    // The catalog is fully populated before the first frame runs; no
    // user-triggered derivation can observe an unloaded state.
    let heroes = load_catalog(&startup)?;
    info!(total = heroes.len(), "starting hero catalog gui");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hero Catalog")
            .with_inner_size([720.0, 880.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Hero Catalog",
        options,
        Box::new(move |_cc| Ok(Box::new(HeroCatalogApp::new(CatalogState::new(heroes))))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop gui: {err}"))
}
