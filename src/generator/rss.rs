use std::fs;
use log::info;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::content::ContentItem;
use crate::site::SiteData;
use crate::utils::error::BoxResult;

/// Write the RSS feed for the configured collection, if enabled.
///
/// Items already carry their rendered excerpt and resolved URL, so the
/// feed is a straight projection of the newest N items.
pub fn build_feed(site: &SiteData) -> BoxResult<()> {
    let feed = &site.config.feed;
    if !feed.enable {
        return Ok(());
    }

    let origin = site_origin(&site.config.site.url);
    let items: Vec<rss::Item> = site
        .items(&feed.collection)
        .iter()
        .take(feed.count)
        .map(|item| to_rss_item(item, &origin))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&site.config.site.title)
        .link(&site.config.site.url)
        .description(&site.config.site.description)
        .items(items)
        .build();

    let path = site.config.output_dir.join(&feed.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, channel.to_string())?;

    info!("Wrote feed to {}", path.display());
    Ok(())
}

fn to_rss_item(item: &ContentItem, origin: &str) -> rss::Item {
    let link = format!("{}{}", origin, item.url);

    ItemBuilder::default()
        .title(item.title.clone().or_else(|| Some(item.slug.clone())))
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(Some(item.excerpt.clone()))
        .pub_date(Some(item.date.to_rfc2822()))
        .build()
}

/// Scheme and host of the site URL, with any path stripped.
///
/// Item URLs already include the base path, so joining them onto the
/// full site URL would duplicate it.
fn site_origin(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or(rest);
            format!("{}://{}", scheme, host)
        }
        None => url.trim_end_matches('/').to_string(),
    }
}
