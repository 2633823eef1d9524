use anyhow::{Context, Result};
use folio_core::{PageMetadata, load_page_metadata, parse_site_toml};
use folio_generator::build_structured_data;
use std::path::PathBuf;

/// Print the JSON-LD document for one page to stdout
pub async fn run(
    path: Option<PathBuf>,
    slug: String,
    metadata: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let meta = resolve_metadata(path, &slug, metadata)?;
    println!("{}", render(&meta, pretty)?);
    Ok(())
}

fn resolve_metadata(
    path: Option<PathBuf>,
    slug: &str,
    metadata: Option<PathBuf>,
) -> Result<PageMetadata> {
    if let Some(file) = metadata {
        return load_page_metadata(&file)
            .with_context(|| format!("Failed to load {}", file.display()));
    }

    let path = path.context("Either a site directory or --metadata is required")?;
    let site = parse_site_toml(path.join("site.toml")).context("Failed to parse site.toml")?;

    let slug = slug.trim_matches('/');
    let page = site
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .with_context(|| format!("No page with slug '{}' in site.toml", slug))?;

    Ok(PageMetadata::for_page(&site, page))
}

fn render(meta: &PageMetadata, pretty: bool) -> Result<String> {
    let document = build_structured_data(meta);
    let json = if pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_resolve_metadata_from_site() {
        let dir = TempDir::new().unwrap();
        crate::commands::init::run(
            dir.path().to_path_buf(),
            Some("X".to_string()),
            Some("Tyler".to_string()),
            Some("http://x".to_string()),
        )
        .await
        .unwrap();

        let meta =
            resolve_metadata(Some(dir.path().to_path_buf()), "/blog/hello-world/", None).unwrap();
        assert_eq!(meta.url, "http://x/blog/hello-world/");
        assert_eq!(meta.author.name, "Tyler");

        let json = render(&meta, false).unwrap();
        assert!(json.contains(r#""headline":"Hello, world""#));
        assert!(json.contains(r#""publisher":{"@type":"Organization","url":"http://x""#));
    }

    #[test]
    fn test_resolve_metadata_unknown_slug() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("site.toml"),
            r#"
[site]
title = "X"
url = "http://x"

[author]
name = "Tyler"

[organization]
name = "X"
url = "http://x"
logo = "http://x/logo.png"
"#,
        )
        .unwrap();

        let err = resolve_metadata(Some(dir.path().to_path_buf()), "nope", None).unwrap_err();
        assert!(err.to_string().contains("No page with slug 'nope'"));
    }

    #[test]
    fn test_render_from_metadata_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("meta.json");
        fs::write(
            &file,
            r#"{
                "author": { "name": "Tyler" },
                "organization": { "url": "http://x", "logo": "http://x/logo.png", "name": "X" },
                "title": "Post A",
                "defaultTitle": "X",
                "description": "",
                "url": "http://x/a",
                "canonicalUrl": "http://x/a",
                "image": "http://x/a.png",
                "datePublished": "2020-01-01"
            }"#,
        )
        .unwrap();

        let meta = resolve_metadata(None, "", Some(file)).unwrap();
        let json = render(&meta, true).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains(r#""datePublished": "2020-01-01""#));
    }
}
