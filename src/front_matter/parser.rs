use crate::front_matter::types::FrontMatter;
use crate::utils::error::{BoxResult, SiteError};

/// A content file split into metadata and body
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Parsed front matter header
    pub front_matter: FrontMatter,
    /// Markdown body below the header
    pub body: String,
}

/// Split a content file into front matter and body.
///
/// The header is a `---` delimited YAML block at the very top of the file.
/// A file without a header parses as empty front matter with the whole file
/// as body. A header that is present but malformed is an error; callers
/// skip the file and continue with the rest of the build.
pub fn parse(content: &str) -> BoxResult<ParsedFile> {
    let has_header = content.starts_with("---\n") || content.starts_with("---\r\n");

    if !has_header {
        return Ok(ParsedFile {
            front_matter: FrontMatter::default(),
            body: content.to_string(),
        });
    }

    // Find the closing delimiter after the opening `---` line
    let after_open = &content[3..];
    let close = after_open
        .find("\n---")
        .ok_or_else(|| SiteError::FrontMatter("unterminated front matter block".to_string()))?;

    let header = &after_open[..close];
    let mut rest = &after_open[close + 4..];

    // Drop the newline that terminates the closing delimiter line
    if let Some(stripped) = rest.strip_prefix("\r\n") {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('\n') {
        rest = stripped;
    }

    let front_matter: FrontMatter = if header.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(header)
            .map_err(|e| SiteError::FrontMatter(format!("invalid YAML header: {}", e)))?
    };

    Ok(ParsedFile {
        front_matter,
        body: rest.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_front_matter() {
        let content = "---\ntitle: Test Page\nlayout: page\ndraft: true\n---\n\nBody text here";
        let parsed = parse(content).unwrap();

        assert_eq!(parsed.front_matter.title, Some("Test Page".to_string()));
        assert_eq!(parsed.front_matter.layout, Some("page".to_string()));
        assert!(parsed.front_matter.draft);
        assert_eq!(parsed.body, "\nBody text here");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let content = "Just a body, no header";
        let parsed = parse(content).unwrap();

        assert_eq!(parsed.front_matter.title, None);
        assert!(!parsed.front_matter.draft);
        assert_eq!(parsed.body, content);
    }

    #[test]
    fn test_parse_custom_fields_preserved() {
        let content = "---\ntitle: T\nfeatured: true\nweight: 3\n---\nbody";
        let parsed = parse(content).unwrap();

        assert_eq!(
            parsed.front_matter.custom.get("featured"),
            Some(&serde_yaml::Value::Bool(true))
        );
        assert!(parsed.front_matter.custom.contains_key("weight"));
    }

    #[test]
    fn test_parse_malformed_header_is_error() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        assert!(parse(content).is_err());
    }

    #[test]
    fn test_parse_unterminated_header_is_error() {
        let content = "---\ntitle: Test\n\nno closing delimiter";
        assert!(parse(content).is_err());
    }
}
