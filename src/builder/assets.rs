use std::fs;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::utils::error::BoxResult;

/// Copy every non-markdown file under the content root into the output
/// directory, preserving relative paths. Markdown is the pipeline's
/// input; everything else ships as-is.
pub fn copy_static_assets(config: &Config) -> BoxResult<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(&config.input_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext == "md" || ext == "markdown" {
            continue;
        }

        let rel = match entry.path().strip_prefix(&config.input_dir) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let dest = config.output_dir.join(rel);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        match fs::copy(entry.path(), &dest) {
            Ok(_) => {
                debug!("Copied asset {}", rel.display());
                copied += 1;
            }
            Err(e) => warn!("Failed to copy {}: {}", entry.path().display(), e),
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use crate::config::loader::finalize;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_assets_but_not_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "src/images/logo.svg", "<svg/>");
        write(tmp.path(), "src/style.css", "body {}");
        write(tmp.path(), "src/posts/2024-01-01-a.md", "body");

        let config = finalize(tmp.path(), Config::default()).unwrap();
        let copied = copy_static_assets(&config).unwrap();

        assert_eq!(copied, 2);
        assert!(tmp.path().join("dist/images/logo.svg").exists());
        assert!(tmp.path().join("dist/style.css").exists());
        assert!(!tmp.path().join("dist/posts/2024-01-01-a.md").exists());
    }
}
