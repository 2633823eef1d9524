use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSiteInfo,
    author: Author,
    organization: Organization,
    #[serde(default)]
    nav: Vec<NavLink>,
    #[serde(default)]
    page: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawSiteInfo {
    title: String,
    url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    avatar: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    slug: String,
    title: String,
    #[serde(default)]
    description: String,
    date_published: String, // Validated, but kept as written
    image: Option<String>,
    canonical_url: Option<String>,
    content: Option<String>, // Convert to PathBuf
    hero: Option<Hero>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let info = SiteInfo {
        title: raw.site.title,
        url: raw.site.url.trim_end_matches('/').to_string(),
        description: raw.site.description,
        image: raw.site.image,
        avatar: raw.site.avatar,
        language: raw.site.language.unwrap_or_else(|| "en".to_string()),
    };

    let mut seen_slugs = HashSet::new();
    let pages: Result<Vec<Page>> = raw
        .page
        .into_iter()
        .map(|p| {
            let slug = normalize_slug(&p.slug)?;
            if !seen_slugs.insert(slug.clone()) {
                return Err(Error::ConfigParse(format!(
                    "Duplicate page slug '{}'",
                    slug
                )));
            }

            validate_date(&p.date_published)?;

            let content = if let Some(content_path) = p.content {
                Some(validate_path(&content_path, "page.content")?)
            } else {
                None
            };

            Ok(Page {
                slug,
                title: p.title,
                description: p.description,
                date_published: p.date_published,
                image: p.image,
                canonical_url: p.canonical_url,
                content,
                hero: p.hero,
            })
        })
        .collect();

    Ok(Site {
        info,
        author: raw.author,
        organization: raw.organization,
        nav: raw.nav,
        pages: pages?,
    })
}

/// Load a standalone page metadata JSON file (camelCase keys)
pub fn load_page_metadata<P: AsRef<Path>>(path: P) -> Result<PageMetadata> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::InvalidData(format!("Invalid page metadata: {}", e)))
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so a
/// site.toml can't point slugs or content outside the project directory.
///
/// # Arguments
///
/// * `path_str` - The path string from user input (site.toml)
/// * `field_name` - Name of the field for error messages
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}

/// Reduce a slug to its plain segments joined by `/`.
///
/// `.` segments and repeated or surrounding slashes are dropped, so `"./a/"`
/// and `"a"` name the same page and `"."` is the home page.
fn normalize_slug(raw: &str) -> Result<String> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let path = validate_path(trimmed, "page.slug")?;
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment.to_str().ok_or_else(|| {
                    Error::ConfigParse(format!("Non UTF-8 slug '{}'", raw))
                })?;
                segments.push(segment);
            }
            Component::CurDir => {}
            _ => {
                return Err(Error::ConfigParse(format!(
                    "Invalid component in 'page.slug': '{}'",
                    raw
                )));
            }
        }
    }

    Ok(segments.join("/"))
}

/// Accept "YYYY-MM-DD" or a full RFC 3339 timestamp
fn validate_date(s: &str) -> Result<()> {
    if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(s).is_ok()
    {
        return Ok(());
    }

    Err(Error::ConfigParse(format!(
        "Invalid date_published '{}', expected YYYY-MM-DD or RFC 3339",
        s
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r##"
[site]
title = "Tyler Haas"
url = "https://tylerhaas.dev/"
description = "Notes on building things"
image = "https://tylerhaas.dev/share.png"

[author]
name = "Tyler Haas"

[organization]
name = "Tyler Haas"
url = "https://tylerhaas.dev"
logo = "https://tylerhaas.dev/logo.png"

[[nav]]
label = "Blog"
path = "/blog/"

[[nav]]
label = "About"
path = "/about/"

[[page]]
slug = "blog/post-a"
title = "Post A"
description = "First post"
date_published = "2020-01-01"
content = "posts/post-a.md"

[page.hero]
text = "Hello *there*"
"##;

    fn with_page(page: &str) -> String {
        let header = MINIMAL.split("[[page]]").next().unwrap();
        format!("{}{}", header, page)
    }

    #[test]
    fn test_parse_minimal_config() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(site.info.title, "Tyler Haas");
        assert_eq!(site.info.url, "https://tylerhaas.dev");
        assert_eq!(site.info.language, "en");
        assert_eq!(site.nav.len(), 2);
        assert_eq!(site.nav[1].label, "About");
        assert_eq!(site.pages.len(), 1);

        let page = &site.pages[0];
        assert_eq!(page.slug, "blog/post-a");
        assert_eq!(page.content, Some(PathBuf::from("posts/post-a.md")));
        assert_eq!(
            page.hero.as_ref().and_then(|h| h.text.as_deref()),
            Some("Hello *there*")
        );
    }

    #[test]
    fn test_parse_keeps_date_text_verbatim() {
        let toml = with_page(
            r#"
[[page]]
slug = "a"
title = "A"
date_published = "2020-01-01T09:30:00+02:00"
"#,
        );
        let site = parse_site_toml_str(&toml).unwrap();
        assert_eq!(site.pages[0].date_published, "2020-01-01T09:30:00+02:00");
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let toml = with_page(
            r#"
[[page]]
slug = "a"
title = "A"
date_published = "January 1st"
"#,
        );
        let err = parse_site_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Invalid date_published"));
    }

    #[test]
    fn test_parse_rejects_duplicate_slugs() {
        let toml = with_page(
            r#"
[[page]]
slug = "a"
title = "A"
date_published = "2020-01-01"

[[page]]
slug = "/a/"
title = "Also A"
date_published = "2020-01-02"
"#,
        );
        let err = parse_site_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate page slug 'a'"));
    }

    #[test]
    fn test_parse_rejects_path_traversal_in_slug() {
        let toml = with_page(
            r#"
[[page]]
slug = "../../etc"
title = "Evil"
date_published = "2020-01-01"
"#,
        );
        let err = parse_site_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Parent directory references"));
        assert!(err.to_string().contains("page.slug"));
    }

    #[test]
    fn test_parse_rejects_absolute_content_path() {
        let toml = with_page(
            r#"
[[page]]
slug = "a"
title = "A"
date_published = "2020-01-01"
content = "/etc/passwd"
"#,
        );
        let err = parse_site_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Absolute paths not allowed"));
    }

    #[test]
    fn test_dot_slugs_alias_existing_pages() {
        for (first, second) in [("", "."), ("a", "./a"), ("blog/a", "blog//./a/")] {
            let toml = with_page(&format!(
                r#"
[[page]]
slug = "{}"
title = "First"
date_published = "2020-01-01"

[[page]]
slug = "{}"
title = "Second"
date_published = "2020-01-02"
"#,
                first, second
            ));
            let err = parse_site_toml_str(&toml).unwrap_err();
            assert!(
                err.to_string().contains("Duplicate page slug"),
                "{:?} and {:?} should collide",
                first,
                second
            );
        }
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug(".").unwrap(), "");
        assert_eq!(normalize_slug("/./blog/./post-a/").unwrap(), "blog/post-a");
        assert_eq!(normalize_slug("blog//post-a").unwrap(), "blog/post-a");
        assert!(normalize_slug("./../a").is_err());
    }

    #[test]
    fn test_normalized_slug_drives_output_and_url() {
        let toml = with_page(
            r#"
[[page]]
slug = "./blog/a/"
title = "A"
date_published = "2020-01-01"
"#,
        );
        let site = parse_site_toml_str(&toml).unwrap();
        let page = &site.pages[0];
        assert_eq!(page.slug, "blog/a");
        assert_eq!(page.output_path(), PathBuf::from("blog/a/index.html"));
        assert_eq!(
            PageMetadata::for_page(&site, page).url,
            "https://tylerhaas.dev/blog/a/"
        );
    }

    #[test]
    fn test_empty_slug_is_home_page() {
        let toml = with_page(
            r#"
[[page]]
title = "Home"
date_published = "2020-01-01"
"#,
        );
        let site = parse_site_toml_str(&toml).unwrap();
        assert_eq!(site.pages[0].slug, "");
        assert_eq!(site.pages[0].output_path(), PathBuf::from("index.html"));
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = parse_site_toml_str("[site]\ntitle = \"x\"\nurl = \"y\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let result = validate_path("   ", "page.content");
        assert!(result.unwrap_err().to_string().contains("Empty path"));
    }

    #[test]
    fn test_load_page_metadata() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "author": {{ "name": "Tyler" }},
                "organization": {{ "url": "http://x", "logo": "http://x/logo.png", "name": "X" }},
                "title": "Post A",
                "defaultTitle": "X",
                "description": "",
                "url": "http://x/a",
                "canonicalUrl": "http://x/a",
                "image": "http://x/a.png",
                "datePublished": "2020-01-01"
            }}"#
        )
        .unwrap();

        let meta = load_page_metadata(file.path()).unwrap();
        assert_eq!(meta.title, "Post A");
        assert_eq!(meta.organization.name, "X");
        assert_eq!(meta.missing_fields(), vec!["description"]);
    }

    #[test]
    fn test_load_page_metadata_rejects_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Post A" }}"#).unwrap();

        let err = load_page_metadata(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
