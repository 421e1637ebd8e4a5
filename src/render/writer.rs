use std::fs;
use std::path::Path;
use log::{error, info, warn};

use crate::collections::builder::output_path_for;
use crate::collections::{paginate, page_url, pagination_urls};
use crate::render::data;
use crate::render::engine::Renderer;
use crate::site::SiteData;
use crate::utils::error::BoxResult;

/// Outcome of one write pass
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteStats {
    /// HTML pages written
    pub pages: usize,

    /// Pages skipped because of a missing layout or render failure
    pub skipped: usize,
}

/// Render and write every page of the site: item pages, paginated
/// collection listings, and tag pages.
///
/// A page that fails to render is logged and skipped; the rest of the
/// site still comes out. All filesystem writes of HTML happen here.
pub fn write_site(site: &SiteData, renderer: &dyn Renderer) -> BoxResult<WriteStats> {
    let mut stats = WriteStats::default();
    let site_obj = data::site_to_liquid(site);

    for items in site.collections.values() {
        for item in items {
            let Some(layout) = &item.layout else {
                warn!("{} has no layout, skipping", item.source_path.display());
                stats.skipped += 1;
                continue;
            };

            if !renderer.has_layout(layout) {
                warn!(
                    "Layout \"{}\" not found for {}, skipping",
                    layout,
                    item.source_path.display()
                );
                stats.skipped += 1;
                continue;
            }

            let globals = data::page_globals(&site_obj, item);
            match renderer.render(layout, &globals) {
                Ok(html) => {
                    write_page(&item.output_path, &html)?;
                    stats.pages += 1;
                }
                Err(e) => {
                    error!("Failed to render {}: {}", item.source_path.display(), e);
                    stats.skipped += 1;
                }
            }
        }
    }

    for (name, collection) in &site.config.collections {
        if let Some(index) = &collection.index {
            write_listing_pages(site, renderer, &site_obj, name, index, &mut stats)?;
        }
    }

    write_tag_pages(site, renderer, &site_obj, &mut stats)?;

    info!("Wrote {} pages ({} skipped)", stats.pages, stats.skipped);
    Ok(stats)
}

/// Paginated index pages for one collection
fn write_listing_pages(
    site: &SiteData,
    renderer: &dyn Renderer,
    site_obj: &liquid::model::Value,
    name: &str,
    index: &crate::config::IndexConfig,
    stats: &mut WriteStats,
) -> BoxResult<()> {
    if !renderer.has_layout(&index.layout) {
        warn!(
            "Layout \"{}\" not found for \"{}\" index, skipping listing",
            index.layout, name
        );
        stats.skipped += 1;
        return Ok(());
    }

    let base_path = &site.config.site.base_path;
    let pages = paginate(site.items(name), site.config.pagination.size);

    for page in &pages {
        let urls = pagination_urls(&index.url, page.page_number, page.total_pages, base_path);
        let globals = data::listing_globals(site_obj, page, &urls);

        // URL carries the base path; the file lands relative to the
        // output root
        let rel = page_url(&index.url, page.page_number, "");
        let out = output_path_for(&site.config.output_dir, &rel);

        match renderer.render(&index.layout, &globals) {
            Ok(html) => {
                write_page(&out, &html)?;
                stats.pages += 1;
            }
            Err(e) => {
                error!("Failed to render \"{}\" index page {}: {}", name, page.page_number, e);
                stats.skipped += 1;
            }
        }
    }

    Ok(())
}

/// One page per tag under /tags/:slug/, when a `tag` layout exists
fn write_tag_pages(
    site: &SiteData,
    renderer: &dyn Renderer,
    site_obj: &liquid::model::Value,
    stats: &mut WriteStats,
) -> BoxResult<()> {
    if site.tags.is_empty() || !renderer.has_layout("tag") {
        return Ok(());
    }

    for tag in site.tags.values() {
        let globals = data::tag_globals(site_obj, tag, &site.config.site.base_path);
        let out = output_path_for(&site.config.output_dir, &format!("/tags/{}/", tag.slug));

        match renderer.render("tag", &globals) {
            Ok(html) => {
                write_page(&out, &html)?;
                stats.pages += 1;
            }
            Err(e) => {
                error!("Failed to render tag page \"{}\": {}", tag.slug, e);
                stats.skipped += 1;
            }
        }
    }

    Ok(())
}

fn write_page(path: &Path, html: &str) -> BoxResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
