use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// Tags as written in front matter: either a comma separated string or a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    /// Comma separated: `tags: rust, web, tooling`
    CommaSeparated(String),
    /// YAML list: `tags: [rust, web]`
    List(Vec<String>),
}

impl TagField {
    /// Normalize to a list of trimmed, non-empty tag strings
    pub fn normalize(&self) -> Vec<String> {
        match self {
            TagField::CommaSeparated(s) => s
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            TagField::List(list) => list
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// Parsed front matter of a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Title of the content
    pub title: Option<String>,

    /// Explicit slug, overrides the filename-derived one
    pub slug: Option<String>,

    /// Date string, parsed later (RFC 3339 or `YYYY-MM-DD [HH:MM:SS]`)
    pub date: Option<String>,

    /// Explicit excerpt, overrides the derived first paragraph
    pub excerpt: Option<String>,

    /// Layout template identifier, overrides the collection default
    pub layout: Option<String>,

    /// Explicit permalink, overrides the collection pattern
    pub permalink: Option<String>,

    /// Tags, either a list or a comma separated string
    pub tags: Option<TagField>,

    /// Draft flag; drafts are excluded from production builds
    #[serde(default)]
    pub draft: bool,

    /// Any other front matter fields, passed through to templates
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_from_comma_string() {
        let tags = TagField::CommaSeparated("rust, web ,tooling,,".to_string());
        assert_eq!(tags.normalize(), vec!["rust", "web", "tooling"]);
    }

    #[test]
    fn test_tags_from_list() {
        let tags = TagField::List(vec!["rust".to_string(), " web ".to_string()]);
        assert_eq!(tags.normalize(), vec!["rust", "web"]);
    }
}
