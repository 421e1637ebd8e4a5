use comrak::Options;

/// Create default comrak options with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // Allow inline HTML in content files

    // Parse options
    options.parse.smart = true;

    options
}

/// Render markdown to HTML using comrak.
///
/// Same body in, same HTML out; no global state is consulted.
pub fn render_markdown(content: &str) -> String {
    let options = create_comrak_options();
    comrak::markdown_to_html(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = render_markdown(markdown);

        assert!(html.contains("<h1"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_rendering_is_stable() {
        let markdown = "Some *emphasis* and a [link](https://example.com).";
        assert_eq!(render_markdown(markdown), render_markdown(markdown));
    }
}
