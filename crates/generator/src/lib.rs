// Static page generation: SEO head, header, hero and markdown content

pub mod components;
pub mod html;
pub mod page;
pub mod seo;

use folio_core::{Error, Result, Site};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use seo::schema_org::{StructuredDataDocument, build as build_structured_data};

pub struct GeneratedSite {
    pub pages: Vec<(PathBuf, String)>, // (output path, html)
}

/// Render every configured page.
///
/// Markdown content paths are resolved against `root` (the directory holding
/// site.toml).
pub fn generate_site(site: &Site, root: &Path) -> Result<GeneratedSite> {
    let mut pages = Vec::with_capacity(site.pages.len());

    for page in &site.pages {
        let body = match &page.content {
            Some(content) => {
                let path = root.join(content);
                let text = fs::read_to_string(&path).map_err(|e| {
                    Error::InvalidData(format!(
                        "Failed to read content for '{}' at {}: {}",
                        page.title,
                        path.display(),
                        e
                    ))
                })?;
                Some(text)
            }
            None => None,
        };

        let html = page::render_page(site, page, body.as_deref())?;
        debug!(slug = %page.slug, bytes = html.len(), "rendered page");
        pages.push((page.output_path(), html));
    }

    Ok(GeneratedSite { pages })
}
