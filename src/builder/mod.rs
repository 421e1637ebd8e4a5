pub mod assets;

use std::fs;
use std::time::Instant;
use log::{info, warn};
use serde_yaml::Value;

use crate::config::Config;
use crate::generator::build_feed;
use crate::plugins::{HookContext, HookRegistry, HookStage};
use crate::render::{write_site, LiquidRenderer, WriteStats};
use crate::site::build_site_data;
use crate::utils::error::BoxResult;

/// Summary of one build pass
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    /// Content items loaded across all collections
    pub items: usize,

    /// HTML pages written
    pub pages_written: usize,

    /// Pages skipped on error or missing layout
    pub pages_skipped: usize,

    /// Static assets copied
    pub assets_copied: usize,
}

/// Run a full build: load collections, render every page, emit the feed
/// and copy assets. Hooks fire at each stage boundary.
pub fn build_site(config: &Config, hooks: &HookRegistry) -> BoxResult<BuildStats> {
    let start = Instant::now();
    let mut ctx = HookContext::new();

    hooks.run(HookStage::PreBuild, &mut ctx);

    let site = build_site_data(config)?;
    let items: usize = site.collections.values().map(|v| v.len()).sum();
    ctx.set("items", Value::Number((items as u64).into()));

    hooks.run(HookStage::PostCollections, &mut ctx);

    let renderer = LiquidRenderer::new(config)?;

    hooks.run(HookStage::PreRender, &mut ctx);

    let WriteStats { pages, skipped } = write_site(&site, &renderer)?;

    if let Err(e) = build_feed(&site) {
        warn!("Feed generation failed: {}", e);
    }

    let assets_copied = assets::copy_static_assets(config)?;

    ctx.set("pages_written", Value::Number((pages as u64).into()));
    hooks.run(HookStage::PostBuild, &mut ctx);

    let stats = BuildStats {
        items,
        pages_written: pages,
        pages_skipped: skipped,
        assets_copied,
    };
    info!(
        "Built {} items into {} pages, {} assets in {:.2?}",
        stats.items,
        stats.pages_written,
        stats.assets_copied,
        start.elapsed()
    );

    Ok(stats)
}

/// Remove the output directory entirely
pub fn clean_output(config: &Config) -> BoxResult<()> {
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir)?;
        info!("Removed {}", config.output_dir.display());
    }
    Ok(())
}
