pub mod engine;
pub mod embeds;

/// Render a markdown body to HTML, including embed rewriting.
///
/// This is the single entry point the content loader calls; it is a pure
/// function of the body text.
pub fn render(body: &str) -> String {
    let html = engine::render_markdown(body);
    embeds::rewrite_embeds(&html)
}
