use liquid::model::Value as LiquidValue;
use liquid::Object;
use serde_yaml::Value as YamlValue;

use crate::collections::{Page, PaginationUrls, Tag};
use crate::content::ContentItem;
use crate::site::SiteData;

/// Convert a YAML value to its Liquid equivalent
pub fn yaml_to_liquid(yaml: YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s),
        YamlValue::Sequence(seq) => {
            LiquidValue::Array(seq.into_iter().map(yaml_to_liquid).collect())
        }
        YamlValue::Mapping(map) => {
            let mut obj = Object::new();
            for (k, v) in map {
                if let YamlValue::String(key) = k {
                    obj.insert(key.into(), yaml_to_liquid(v));
                }
            }
            LiquidValue::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(tagged.value),
    }
}

/// Template object for one content item
pub fn item_to_liquid(item: &ContentItem) -> LiquidValue {
    let mut obj = Object::new();

    obj.insert("slug".into(), LiquidValue::scalar(item.slug.clone()));
    obj.insert(
        "title".into(),
        match &item.title {
            Some(title) => LiquidValue::scalar(title.clone()),
            None => LiquidValue::Nil,
        },
    );
    obj.insert("content".into(), LiquidValue::scalar(item.rendered_html.clone()));
    obj.insert("excerpt".into(), LiquidValue::scalar(item.excerpt.clone()));
    obj.insert("url".into(), LiquidValue::scalar(item.url.clone()));
    obj.insert("permalink".into(), LiquidValue::scalar(item.permalink.clone()));
    obj.insert("collection".into(), LiquidValue::scalar(item.collection.clone()));
    obj.insert("draft".into(), LiquidValue::scalar(item.draft));
    obj.insert(
        "date".into(),
        LiquidValue::scalar(item.date.format("%Y-%m-%d %H:%M:%S").to_string()),
    );
    obj.insert(
        "date_iso".into(),
        LiquidValue::scalar(item.date.to_rfc3339()),
    );
    obj.insert(
        "tags".into(),
        LiquidValue::Array(
            item.tags
                .iter()
                .map(|t| LiquidValue::scalar(t.clone()))
                .collect(),
        ),
    );

    // Custom front matter keys sit alongside the built-ins but never
    // shadow them
    for (key, value) in &item.custom {
        if !obj.contains_key(key.as_str()) {
            obj.insert(key.clone().into(), yaml_to_liquid(value.clone()));
        }
    }

    LiquidValue::Object(obj)
}

/// Template object for one aggregated tag.
///
/// Tag URLs carry the base path like item URLs do, so links stay valid
/// when the site is hosted under a subdirectory.
pub fn tag_to_liquid(tag: &Tag, base_path: &str) -> LiquidValue {
    let mut obj = Object::new();
    obj.insert("name".into(), LiquidValue::scalar(tag.name.clone()));
    obj.insert("slug".into(), LiquidValue::scalar(tag.slug.clone()));
    obj.insert("count".into(), LiquidValue::scalar(tag.count as i64));
    obj.insert(
        "url".into(),
        LiquidValue::scalar(format!("{}/tags/{}/", base_path, tag.slug)),
    );
    LiquidValue::Object(obj)
}

/// The `site` object shared by every render call
pub fn site_to_liquid(site: &SiteData) -> LiquidValue {
    let mut obj = Object::new();
    let meta = &site.config.site;

    obj.insert("title".into(), LiquidValue::scalar(meta.title.clone()));
    obj.insert("description".into(), LiquidValue::scalar(meta.description.clone()));
    obj.insert("url".into(), LiquidValue::scalar(meta.url.clone()));
    obj.insert(
        "author".into(),
        match &meta.author {
            Some(author) => LiquidValue::scalar(author.clone()),
            None => LiquidValue::Nil,
        },
    );
    obj.insert("base_path".into(), LiquidValue::scalar(meta.base_path.clone()));

    for (key, value) in &meta.custom {
        if !obj.contains_key(key.as_str()) {
            obj.insert(key.clone().into(), yaml_to_liquid(value.clone()));
        }
    }

    let mut collections = Object::new();
    for (name, items) in &site.collections {
        collections.insert(
            name.clone().into(),
            LiquidValue::Array(items.iter().map(item_to_liquid).collect()),
        );
    }
    obj.insert("collections".into(), LiquidValue::Object(collections));

    obj.insert(
        "tags".into(),
        LiquidValue::Array(
            site.all_tags
                .iter()
                .map(|tag| tag_to_liquid(tag, &meta.base_path))
                .collect(),
        ),
    );

    LiquidValue::Object(obj)
}

/// Globals for a single item page
pub fn page_globals(site_obj: &LiquidValue, item: &ContentItem) -> Object {
    let mut globals = Object::new();
    globals.insert("site".into(), site_obj.clone());
    globals.insert("page".into(), item_to_liquid(item));
    globals
}

/// Globals for one page of a collection listing
pub fn listing_globals(
    site_obj: &LiquidValue,
    page: &Page<ContentItem>,
    urls: &PaginationUrls,
) -> Object {
    let mut pagination = Object::new();
    pagination.insert("page".into(), LiquidValue::scalar(page.page_number as i64));
    pagination.insert("total_pages".into(), LiquidValue::scalar(page.total_pages as i64));
    pagination.insert(
        "previous".into(),
        match &urls.previous {
            Some(url) => LiquidValue::scalar(url.clone()),
            None => LiquidValue::Nil,
        },
    );
    pagination.insert(
        "next".into(),
        match &urls.next {
            Some(url) => LiquidValue::scalar(url.clone()),
            None => LiquidValue::Nil,
        },
    );

    let mut globals = Object::new();
    globals.insert("site".into(), site_obj.clone());
    globals.insert(
        "items".into(),
        LiquidValue::Array(page.items.iter().map(item_to_liquid).collect()),
    );
    globals.insert("pagination".into(), LiquidValue::Object(pagination));
    globals
}

/// Globals for one tag page
pub fn tag_globals(site_obj: &LiquidValue, tag: &Tag, base_path: &str) -> Object {
    let mut globals = Object::new();
    globals.insert("site".into(), site_obj.clone());
    globals.insert("tag".into(), tag_to_liquid(tag, base_path));
    globals.insert(
        "items".into(),
        LiquidValue::Array(tag.items.iter().map(|item| item_to_liquid(item)).collect()),
    );
    globals
}
