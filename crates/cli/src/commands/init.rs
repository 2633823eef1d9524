use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for safe inclusion in a TOML basic string
///
/// The template is written by hand (to keep its comments), so values are
/// escaped here instead of going through the toml serializer.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new site directory.
///
/// Creates `site.toml`, a sample post under `posts/` and an empty `static/`
/// directory for assets copied verbatim on build.
///
/// # Errors
///
/// Returns an error if site.toml already exists in the directory or a file
/// operation fails.
pub async fn run(
    path: PathBuf,
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(path.join("posts")).context("Failed to create posts directory")?;
    fs::create_dir_all(path.join("static")).context("Failed to create static directory")?;

    generate_site_toml(&path, title.as_deref(), author.as_deref(), url.as_deref())?;
    generate_sample_post(&path)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml            ← Edit this to set title, author, pages");
    println!("  ├── posts/");
    println!("  │   └── hello-world.md");
    println!("  └── static/              ← Copied as-is into the build output");

    println!("\nNext steps:");
    println!("  1. Edit site.toml (set url, organization logo, share image)");
    println!("  2. Write posts and add a [[page]] entry for each");
    println!("  3. Build: folio build {} --output dist", path.display());

    Ok(())
}

fn generate_site_toml(
    base: &Path,
    title: Option<&str>,
    author: Option<&str>,
    url: Option<&str>,
) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d").to_string();

    let site_title = toml_escape_string(title.unwrap_or("My Site"));
    let author_name = toml_escape_string(author.unwrap_or("Your Name"));
    let site_url = toml_escape_string(url.unwrap_or("https://example.com").trim_end_matches('/'));

    let title_comment = if title.is_some() { "" } else { "  # TODO: Set site title" };
    let author_comment = if author.is_some() { "" } else { "  # TODO: Set author name" };
    let url_comment = if url.is_some() { "" } else { "  # TODO: Set site URL" };

    let toml = format!(
        r##"# Generated by folio init
# Edit this file to customize your site

[site]
title = "{site_title}"{title_comment}
url = "{site_url}"{url_comment}
description = "Notes, posts and projects"
image = "{site_url}/images/share.png"  # Default share image
# avatar = "/images/avatar.png"  # Optional header image
language = "en"

[author]
name = "{author_name}"{author_comment}

[organization]
name = "{site_title}"
url = "{site_url}"
logo = "{site_url}/images/logo.png"

[[nav]]
label = "Blog"
path = "/blog/"

[[nav]]
label = "About"
path = "/about/"

# The home page has an empty slug
[[page]]
slug = ""
title = "{site_title}"
description = "Notes, posts and projects"
date_published = "{today}"

[page.hero]
text = "Hi, I'm **{author_name}**. I write about software."

[[page]]
slug = "blog/hello-world"
title = "Hello, world"
description = "The first post"
date_published = "{today}"
content = "posts/hello-world.md"
# image = "{site_url}/images/hello-world.png"  # Optional, defaults to site image
# canonical_url = "https://elsewhere.example.com/hello-world"  # Optional
"##
    );

    // Validate the generated TOML can be parsed
    folio_core::config::parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join("site.toml"), toml)?;

    Ok(())
}

fn generate_sample_post(base: &Path) -> Result<()> {
    let template = r##"This is your first post. It's markdown, so you can use:

- **Bold** and *italic* text
- [Links](https://example.com)
- Lists, tables and code blocks

Edit `posts/hello-world.md` to change it.
"##;

    fs::write(base.join("posts").join("hello-world.md"), template)?;

    Ok(())
}
