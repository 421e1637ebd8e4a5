use std::fs;
use std::path::PathBuf;
use liquid::Parser;
use log::debug;

use crate::config::Config;
use crate::utils::error::{BoxResult, SiteError};

/// Seam between the pipeline and whatever produces HTML from a layout
/// name and template data. The build pipeline only talks to this trait.
pub trait Renderer {
    /// Render the named layout with the given globals
    fn render(&self, layout: &str, globals: &liquid::Object) -> BoxResult<String>;

    /// Whether a layout with this name exists
    fn has_layout(&self, layout: &str) -> bool;
}

/// Liquid-backed renderer reading layouts from the configured directory
pub struct LiquidRenderer {
    layouts_dir: PathBuf,
    parser: Parser,
}

impl LiquidRenderer {
    pub fn new(config: &Config) -> BoxResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| SiteError::Template(format!("failed to create parser: {}", e)))?;

        Ok(LiquidRenderer {
            layouts_dir: config.layouts_dir.clone(),
            parser,
        })
    }

    fn find_layout(&self, name: &str) -> Option<PathBuf> {
        for ext in &["liquid", "html"] {
            let path = self.layouts_dir.join(format!("{}.{}", name, ext));
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

impl Renderer for LiquidRenderer {
    fn render(&self, layout: &str, globals: &liquid::Object) -> BoxResult<String> {
        let path = self
            .find_layout(layout)
            .ok_or_else(|| SiteError::Template(format!("layout not found: {}", layout)))?;
        debug!("Using layout {}", path.display());

        let source = fs::read_to_string(&path)?;

        let template = self.parser.parse(&source).map_err(|e| {
            SiteError::Template(format!("failed to parse layout {}: {}", layout, e))
        })?;

        let rendered = template.render(globals).map_err(|e| {
            SiteError::Template(format!("failed to render layout {}: {}", layout, e))
        })?;

        Ok(rendered)
    }

    fn has_layout(&self, layout: &str) -> bool {
        self.find_layout(layout).is_some()
    }
}
