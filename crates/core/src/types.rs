use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub info: SiteInfo,
    pub author: Author,
    pub organization: Organization,
    pub nav: Vec<NavLink>,
    pub pages: Vec<Page>,
}

/// Site-wide settings from the `[site]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Default title, used as `alternateName` on every page
    pub title: String,
    /// Base URL without a trailing slash
    pub url: String,
    pub description: String,
    /// Default share image for pages that don't set their own
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Publisher shown on every posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub url: String,
    pub logo: String,
    pub name: String,
}

/// Header navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// Individual page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 text, kept exactly as written in site.toml
    pub date_published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
}

impl Page {
    /// Output file relative to the build directory
    pub fn output_path(&self) -> PathBuf {
        let slug = self.slug.trim_matches('/');
        if slug.is_empty() {
            PathBuf::from("index.html")
        } else {
            PathBuf::from(slug).join("index.html")
        }
    }

    /// Site-relative path, e.g. `/blog/post-a/`
    pub fn path(&self) -> String {
        let slug = self.slug.trim_matches('/');
        if slug.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", slug)
        }
    }
}

/// Banner shown above page content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub image: String,
}

/// Everything the SEO layer needs to describe one page.
///
/// Field names serialize in camelCase so a metadata file can be written by
/// hand (`defaultTitle`, `canonicalUrl`, `datePublished`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub author: Author,
    pub organization: Organization,
    pub title: String,
    pub default_title: String,
    pub description: String,
    pub url: String,
    pub canonical_url: String,
    pub image: String,
    pub date_published: String,
}

impl PageMetadata {
    /// Derive page metadata from site defaults and the page's own settings.
    pub fn for_page(site: &Site, page: &Page) -> Self {
        let url = page_url(&site.info.url, &page.slug);
        let canonical_url = page.canonical_url.clone().unwrap_or_else(|| url.clone());
        let image = page.image.clone().unwrap_or_else(|| site.info.image.clone());

        PageMetadata {
            author: site.author.clone(),
            organization: site.organization.clone(),
            title: page.title.clone(),
            default_title: site.info.title.clone(),
            description: page.description.clone(),
            url,
            canonical_url,
            image,
            date_published: page.date_published.clone(),
        }
    }

    /// Names of fields that are empty (or whitespace only).
    ///
    /// Empty values are carried into the structured data as-is, so callers
    /// use this to warn before rendering.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &str); 11] = [
            ("author.name", &self.author.name),
            ("organization.url", &self.organization.url),
            ("organization.logo", &self.organization.logo),
            ("organization.name", &self.organization.name),
            ("title", &self.title),
            ("defaultTitle", &self.default_title),
            ("description", &self.description),
            ("url", &self.url),
            ("canonicalUrl", &self.canonical_url),
            ("image", &self.image),
            ("datePublished", &self.date_published),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Join a base URL and a slug into an absolute page URL with a trailing slash
pub fn page_url(base: &str, slug: &str) -> String {
    let base = base.trim_end_matches('/');
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}/", base, slug)
    }
}
