// Page head metadata: title, description, Open Graph, Twitter cards, JSON-LD

pub mod schema_org;

use crate::html::html_escape;
use folio_core::{PageMetadata, Result};

/// Browser title: the page title, suffixed with the site title when they differ
pub fn document_title(meta: &PageMetadata) -> String {
    if meta.title.is_empty() || meta.title == meta.default_title {
        meta.default_title.clone()
    } else if meta.default_title.is_empty() {
        meta.title.clone()
    } else {
        format!("{} | {}", meta.title, meta.default_title)
    }
}

/// Render the SEO fragment placed inside `<head>`
pub fn render_head(meta: &PageMetadata) -> Result<String> {
    let title = html_escape(&document_title(meta));
    let og_title = html_escape(&meta.title);
    let description = html_escape(&meta.description);
    let url = html_escape(&meta.url);
    let canonical = html_escape(&meta.canonical_url);
    let image = html_escape(&meta.image);

    let json_ld = schema_org::build(meta).script_tag()?;

    Ok(format!(
        r#"    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="image" content="{image}">
    <link rel="canonical" href="{canonical}">

    <!-- OpenGraph tags -->
    <meta property="og:url" content="{url}">
    <meta property="og:type" content="article">
    <meta property="og:title" content="{og_title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{image}">

    <!-- Twitter Card tags -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="{og_title}">
    <meta name="twitter:description" content="{description}">
    <meta name="twitter:image" content="{image}">

    <!-- Schema.org tags -->
    {json_ld}
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Author, Organization};

    fn meta() -> PageMetadata {
        PageMetadata {
            author: Author {
                name: "Tyler".to_string(),
            },
            organization: Organization {
                url: "http://x".to_string(),
                logo: "http://x/logo.png".to_string(),
                name: "X".to_string(),
            },
            title: "Post A".to_string(),
            default_title: "X Blog".to_string(),
            description: "Tips & \"tricks\"".to_string(),
            url: "http://x/a/".to_string(),
            canonical_url: "http://x/a/".to_string(),
            image: "http://x/a.png".to_string(),
            date_published: "2020-01-01".to_string(),
        }
    }

    #[test]
    fn test_document_title() {
        let mut m = meta();
        assert_eq!(document_title(&m), "Post A | X Blog");

        m.title = "X Blog".to_string();
        assert_eq!(document_title(&m), "X Blog");

        m.title = String::new();
        assert_eq!(document_title(&m), "X Blog");
    }

    #[test]
    fn test_render_head_escapes_attributes() {
        let head = render_head(&meta()).unwrap();
        assert!(head.contains("<title>Post A | X Blog</title>"));
        assert!(head.contains(r#"content="Tips &amp; &quot;tricks&quot;""#));
        assert!(head.contains(r#"<link rel="canonical" href="http://x/a/">"#));
        assert!(head.contains(r#"<meta property="og:image" content="http://x/a.png">"#));
    }

    #[test]
    fn test_render_head_embeds_json_ld() {
        let head = render_head(&meta()).unwrap();
        assert_eq!(head.matches(r#"<script type="application/ld+json">"#).count(), 1);
        assert!(head.contains(r#""@type":"BlogPosting""#));
    }
}
