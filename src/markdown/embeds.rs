use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
        .unwrap()
});

static GIPHY_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:giphy\.com/gifs/|giphy\.com/embed/|gph\.is/g/|media\.giphy\.com/media/)([a-zA-Z0-9]+)")
        .unwrap()
});

static YOUTUBE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\s+[^>]*href=["']([^"']*youtube[^"']*|[^"']*youtu\.be[^"']*)["'][^>]*>[^<]*</a>"#)
        .unwrap()
});

static GIPHY_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\s+[^>]*href=["']([^"']*giphy[^"']*|[^"']*gph\.is[^"']*)["'][^>]*>[^<]*</a>"#)
        .unwrap()
});

/// Extract a YouTube video id from a URL
fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract a Giphy gif id from a URL
fn extract_giphy_id(url: &str) -> Option<&str> {
    GIPHY_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn youtube_iframe(video_id: &str) -> String {
    format!(
        "<div class=\"youtube-embed\"><iframe src=\"https://www.youtube.com/embed/{}\" \
         frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; \
         gyroscope; picture-in-picture\" allowfullscreen></iframe></div>",
        video_id
    )
}

fn giphy_iframe(gif_id: &str) -> String {
    format!(
        "<div class=\"giphy-embed\"><iframe src=\"https://giphy.com/embed/{}\" \
         frameborder=\"0\" class=\"giphy-embed\" allowfullscreen></iframe></div>",
        gif_id
    )
}

/// Rewrite recognized YouTube and Giphy links in rendered HTML into
/// responsive iframe embeds. Links that do not carry a recognizable
/// video/gif id are left untouched.
pub fn rewrite_embeds(html: &str) -> String {
    let html = YOUTUBE_LINK.replace_all(html, |caps: &regex::Captures| {
        match extract_youtube_id(&caps[1]) {
            Some(id) => youtube_iframe(id),
            None => caps[0].to_string(),
        }
    });

    GIPHY_LINK
        .replace_all(&html, |caps: &regex::Captures| {
            match extract_giphy_id(&caps[1]) {
                Some(id) => giphy_iframe(id),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_link_becomes_embed() {
        let html = r#"<p><a href="https://www.youtube.com/watch?v=dQw4w9WgXcQ">watch</a></p>"#;
        let rewritten = rewrite_embeds(html);

        assert!(rewritten.contains("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(rewritten.contains("class=\"youtube-embed\""));
        assert!(!rewritten.contains("<a "));
    }

    #[test]
    fn test_short_youtube_url() {
        let html = r#"<a href="https://youtu.be/dQw4w9WgXcQ">clip</a>"#;
        assert!(rewrite_embeds(html).contains("youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_giphy_link_becomes_embed() {
        let html = r#"<a href="https://giphy.com/gifs/abc123XYZ">gif</a>"#;
        let rewritten = rewrite_embeds(html);

        assert!(rewritten.contains("giphy.com/embed/abc123XYZ"));
    }

    #[test]
    fn test_ordinary_links_untouched() {
        let html = r#"<a href="https://example.com/page">link</a>"#;
        assert_eq!(rewrite_embeds(html), html);
    }
}
