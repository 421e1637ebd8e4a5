use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{error, info};

use crate::config::loader::load_config;
use crate::utils::error::BoxResult;
use crate::utils::slug::slugify;

const CONFIG_TEMPLATE: &str = r#"site:
  title: My Site
  description: A new site
  url: ""
  author: ""

pagination:
  size: 10
"#;

const POST_LAYOUT: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{{ page.title }} - {{ site.title }}</title></head>
<body>
<article>
  <h1>{{ page.title }}</h1>
  {{ page.content }}
</article>
</body>
</html>
"#;

const PAGE_LAYOUT: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{{ page.title }} - {{ site.title }}</title></head>
<body>
{{ page.content }}
</body>
</html>
"#;

const BLOG_LAYOUT: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{{ site.title }}</title></head>
<body>
<ul>
{% for item in items %}
  <li><a href="{{ item.url }}">{{ item.title }}</a></li>
{% endfor %}
</ul>
{% if pagination.previous %}<a href="{{ pagination.previous }}">Newer</a>{% endif %}
{% if pagination.next %}<a href="{{ pagination.next }}">Older</a>{% endif %}
</body>
</html>
"#;

const ABOUT_PAGE: &str = r#"---
title: About
---
This site was scaffolded by siteforge.
"#;

/// Handle the new site command
pub fn handle_new_command(path: &Path) {
    match scaffold_site(path) {
        Ok(()) => info!("Created new site at {}", path.display()),
        Err(e) => error!("Failed to create site: {}", e),
    }
}

/// Handle the new post command
pub fn handle_new_post_command(root: &Path, title: &str, draft: bool) {
    match scaffold_content(root, "posts", title, draft) {
        Ok(path) => info!("Created {}", path.display()),
        Err(e) => error!("Failed to create post: {}", e),
    }
}

/// Handle the new page command
pub fn handle_new_page_command(root: &Path, title: &str) {
    match scaffold_content(root, "pages", title, false) {
        Ok(path) => info!("Created {}", path.display()),
        Err(e) => error!("Failed to create page: {}", e),
    }
}

/// Create one content file in a collection directory: front matter with
/// the given title, filename derived from its slug. Posts get the date
/// prefix that feeds their permalink and sort order.
fn scaffold_content(
    root: &Path,
    collection: &str,
    title: &str,
    draft: bool,
) -> BoxResult<PathBuf> {
    let config = load_config(root)?;
    let Some(cc) = config.collections.get(collection) else {
        return Err(format!("no \"{}\" collection configured", collection).into());
    };

    let slug = slugify(title);
    if slug.is_empty() {
        return Err(format!("title \"{}\" produces an empty slug", title).into());
    }

    let filename = if collection == "posts" {
        format!("{}-{}.md", Utc::now().format("%Y-%m-%d"), slug)
    } else {
        format!("{}.md", slug)
    };

    let dir = config.collection_dir(cc);
    fs::create_dir_all(&dir)?;

    let path = dir.join(filename);
    if path.exists() {
        return Err(format!("{} already exists", path.display()).into());
    }

    let mut front = format!("---\ntitle: {}\n", title);
    if draft {
        front.push_str("draft: true\n");
    }
    front.push_str("---\n\n");
    fs::write(&path, front)?;

    Ok(path)
}

fn scaffold_site(root: &Path) -> BoxResult<()> {
    if root.exists() && root.read_dir()?.next().is_some() {
        return Err(format!("{} already exists and is not empty", root.display()).into());
    }

    for dir in ["src/posts", "src/pages", "src/notes", "_layouts", "_includes"] {
        fs::create_dir_all(root.join(dir))?;
    }

    fs::write(root.join("_config.yml"), CONFIG_TEMPLATE)?;
    fs::write(root.join("_layouts/post.liquid"), POST_LAYOUT)?;
    fs::write(root.join("_layouts/page.liquid"), PAGE_LAYOUT)?;
    fs::write(root.join("_layouts/note.liquid"), POST_LAYOUT)?;
    fs::write(root.join("_layouts/blog.liquid"), BLOG_LAYOUT)?;
    fs::write(root.join("_layouts/notes.liquid"), BLOG_LAYOUT)?;
    fs::write(root.join("src/pages/about.md"), ABOUT_PAGE)?;

    let today = Utc::now().format("%Y-%m-%d");
    let sample_post = "---\ntitle: Hello World\ntags: [meta]\n---\nWelcome to your new site.\n";
    fs::write(
        root.join(format!("src/posts/{}-hello-world.md", today)),
        sample_post,
    )?;

    Ok(())
}
