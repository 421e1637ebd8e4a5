use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::ContentItem;
use crate::front_matter;
use crate::markdown;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::slug::slugify;

/// Maximum derived excerpt length in characters, ellipsis included
const EXCERPT_LIMIT: usize = 200;

static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap());
static LEADING_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap());
static LEADING_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s+.*\n?").unwrap());

/// Load one content file into a `ContentItem`.
///
/// Collection assignment, layout default and permalink resolution happen
/// later in the collection builder.
pub fn load_item(path: &Path) -> BoxResult<ContentItem> {
    let content = fs::read_to_string(path)
        .map_err(|e| SiteError::FrontMatter(format!("unreadable file: {}", e)))?;
    build_item(path, &content)
}

/// Build a `ContentItem` from a source path and file contents
pub fn build_item(path: &Path, content: &str) -> BoxResult<ContentItem> {
    let parsed = front_matter::parse(content)?;
    let fm = parsed.front_matter;

    let slug = match &fm.slug {
        Some(explicit) => explicit.clone(),
        None => slug_from_filename(path),
    };

    let date = fm
        .date
        .as_deref()
        .and_then(parse_date_string)
        .or_else(|| date_from_filename(path))
        .unwrap_or_else(Utc::now);

    let excerpt = match &fm.excerpt {
        Some(explicit) => explicit.clone(),
        None => derive_excerpt(&parsed.body),
    };

    let tags = fm.tags.as_ref().map(|t| t.normalize()).unwrap_or_default();
    let rendered_html = markdown::render(&parsed.body);

    Ok(ContentItem {
        slug,
        date,
        title: fm.title,
        raw_body: parsed.body,
        rendered_html,
        excerpt,
        tags,
        collection: String::new(),
        layout: fm.layout,
        draft: fm.draft,
        permalink: fm.permalink.unwrap_or_default(),
        url: String::new(),
        output_path: PathBuf::new(),
        source_path: path.to_path_buf(),
        custom: fm.custom,
    })
}

/// Derive the slug from the filename, stripping a `YYYY-MM-DD-` prefix
/// when present
pub fn slug_from_filename(path: &Path) -> String {
    let stem = file_stem(path);

    if let Some(caps) = DATE_PREFIX.captures(&stem) {
        return caps[2].to_string();
    }

    slugify(&stem)
}

/// Extract a date from a `YYYY-MM-DD` filename prefix, if present and valid
pub fn date_from_filename(path: &Path) -> Option<DateTime<Utc>> {
    let stem = file_stem(path);
    let caps = LEADING_DATE.captures(&stem)?;

    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Parse a front matter date string, trying RFC 3339 and the common
/// `YYYY-MM-DD [HH:MM:SS]` forms
pub fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date_str) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

/// First paragraph of the body, leading heading stripped, truncated at a
/// word boundary
fn derive_excerpt(body: &str) -> String {
    let first_paragraph = body.trim_start().split("\n\n").next().unwrap_or("");
    let stripped = LEADING_HEADING.replace(first_paragraph, "");
    truncate_at_word(stripped.trim(), EXCERPT_LIMIT)
}

/// Truncate to at most `limit` characters, cutting at the last whitespace
/// before the limit and appending an ellipsis marker
fn truncate_at_word(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let budget: String = text.chars().take(limit - 3).collect();
    let cut = match budget.rfind(char::is_whitespace) {
        Some(pos) => budget[..pos].trim_end(),
        None => budget.as_str(),
    };

    format!("{}...", cut)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_dated_filename() {
        let path = Path::new("posts/2024-03-05-my-post.md");
        assert_eq!(slug_from_filename(path), "my-post");
    }

    #[test]
    fn test_slug_from_plain_filename() {
        let path = Path::new("pages/About Me.md");
        assert_eq!(slug_from_filename(path), "about-me");
    }

    #[test]
    fn test_date_from_filename() {
        let path = Path::new("2024-03-05-my-post.md");
        let date = date_from_filename(path).unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-03-05");
    }

    #[test]
    fn test_invalid_filename_date_ignored() {
        assert!(date_from_filename(Path::new("2024-13-99-bad.md")).is_none());
        assert!(date_from_filename(Path::new("my-post.md")).is_none());
    }

    #[test]
    fn test_front_matter_overrides_filename() {
        let content = "---\nslug: custom\ndate: 2020-01-15\n---\nBody";
        let item = build_item(Path::new("2024-03-05-my-post.md"), content).unwrap();

        assert_eq!(item.slug, "custom");
        assert_eq!(item.date.format("%Y-%m-%d").to_string(), "2020-01-15");
    }

    #[test]
    fn test_filename_derivation_without_front_matter() {
        let item = build_item(Path::new("2024-03-05-my-post.md"), "Hello world").unwrap();

        assert_eq!(item.slug, "my-post");
        assert_eq!(item.date.format("%Y-%m-%d").to_string(), "2024-03-05");
    }

    #[test]
    fn test_excerpt_first_paragraph() {
        let content = "# Title\nFirst paragraph text.\n\nSecond paragraph.";
        let item = build_item(Path::new("a.md"), content).unwrap();

        assert_eq!(item.excerpt, "First paragraph text.");
    }

    #[test]
    fn test_excerpt_explicit_wins() {
        let content = "---\nexcerpt: Hand written summary\n---\nSome long body text.";
        let item = build_item(Path::new("a.md"), content).unwrap();

        assert_eq!(item.excerpt, "Hand written summary");
    }

    #[test]
    fn test_excerpt_truncated_at_word_boundary() {
        let long_paragraph = "word ".repeat(50); // 250 characters
        let item = build_item(Path::new("a.md"), &long_paragraph).unwrap();

        assert!(item.excerpt.chars().count() <= 200);
        assert!(item.excerpt.ends_with("..."));
        // No mid-word cut: everything before the ellipsis is a full word
        assert!(item.excerpt.trim_end_matches("...").ends_with("word"));
    }

    #[test]
    fn test_short_excerpt_untouched() {
        let item = build_item(Path::new("a.md"), "Short body.").unwrap();
        assert_eq!(item.excerpt, "Short body.");
        assert!(!item.excerpt.ends_with("..."));
    }

    #[test]
    fn test_tags_normalized_from_string() {
        let content = "---\ntags: rust, web, tooling\n---\nBody";
        let item = build_item(Path::new("a.md"), content).unwrap();
        assert_eq!(item.tags, vec!["rust", "web", "tooling"]);
    }

    #[test]
    fn test_tags_default_empty() {
        let item = build_item(Path::new("a.md"), "Body").unwrap();
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_body_is_rendered() {
        let item = build_item(Path::new("a.md"), "Some **bold** text").unwrap();
        assert!(item.rendered_html.contains("<strong>bold</strong>"));
        assert_eq!(item.raw_body, "Some **bold** text");
    }
}
