//! schema.org structured data for a single page.
//!
//! [`build`] projects [`PageMetadata`] onto three fixed records (WebSite,
//! BreadcrumbList, BlogPosting) that serialize as a JSON-LD array. Every value
//! is borrowed from the metadata unchanged; nothing is derived or validated
//! here, so empty input fields show up as empty strings in the output.

use folio_core::{PageMetadata, Result};
use serde::Serialize;
use serde::ser::{SerializeTuple, Serializer};

pub const SCHEMA_CONTEXT: &str = "http://schema.org";

/// The three top-level records, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDataDocument<'a> {
    pub website: WebSite<'a>,
    pub breadcrumbs: BreadcrumbList<'a>,
    pub posting: BlogPosting<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: &'a str,
    pub name: &'a str,
    pub alternate_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Always exactly one entry: the page itself
    pub item_list_element: [ListItem<'a>; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub item: BreadcrumbItem<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem<'a> {
    #[serde(rename = "@id")]
    pub id: &'a str,
    pub name: &'a str,
    pub image: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: &'a str,
    pub name: &'a str,
    pub alternate_name: &'a str,
    pub headline: &'a str,
    pub image: ImageObject<'a>,
    pub description: &'a str,
    pub author: Person<'a>,
    pub publisher: Organization<'a>,
    pub main_entity_of_page: MainEntity<'a>,
    pub date_published: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: &'a str,
    pub logo: &'a str,
    pub name: &'a str,
}

/// `mainEntityOfPage` reference to the canonical URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainEntity<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: &'a str,
}

/// Build the structured data document for a page
pub fn build(meta: &PageMetadata) -> StructuredDataDocument<'_> {
    StructuredDataDocument {
        website: WebSite {
            context: SCHEMA_CONTEXT,
            kind: "WebSite",
            url: &meta.url,
            name: &meta.title,
            alternate_name: &meta.default_title,
        },
        breadcrumbs: BreadcrumbList {
            context: SCHEMA_CONTEXT,
            kind: "BreadcrumbList",
            item_list_element: [ListItem {
                kind: "ListItem",
                position: 1,
                item: BreadcrumbItem {
                    id: &meta.url,
                    name: &meta.title,
                    image: &meta.image,
                },
            }],
        },
        posting: BlogPosting {
            context: SCHEMA_CONTEXT,
            kind: "BlogPosting",
            url: &meta.url,
            name: &meta.title,
            alternate_name: &meta.default_title,
            headline: &meta.title,
            image: ImageObject {
                kind: "ImageObject",
                url: &meta.image,
            },
            description: &meta.description,
            author: Person {
                kind: "Person",
                name: &meta.author.name,
            },
            publisher: Organization {
                kind: "Organization",
                url: &meta.organization.url,
                logo: &meta.organization.logo,
                name: &meta.organization.name,
            },
            main_entity_of_page: MainEntity {
                kind: "WebSite",
                id: &meta.canonical_url,
            },
            date_published: &meta.date_published,
        },
    }
}

// Serialized as a JSON array, not an object
impl Serialize for StructuredDataDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(3)?;
        seq.serialize_element(&self.website)?;
        seq.serialize_element(&self.breadcrumbs)?;
        seq.serialize_element(&self.posting)?;
        seq.end()
    }
}

impl StructuredDataDocument<'_> {
    /// Compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The document wrapped in `<script type="application/ld+json">`.
    ///
    /// `<`, `>` and `&` only ever appear inside JSON strings here, so writing
    /// them as `\u` escapes keeps the payload from closing the script element
    /// without changing any parsed value.
    pub fn script_tag(&self) -> Result<String> {
        let json = self.to_json()?;
        let mut escaped = String::with_capacity(json.len());
        for c in json.chars() {
            match c {
                '<' => escaped.push_str("\\u003c"),
                '>' => escaped.push_str("\\u003e"),
                '&' => escaped.push_str("\\u0026"),
                _ => escaped.push(c),
            }
        }
        Ok(format!(
            r#"<script type="application/ld+json">{}</script>"#,
            escaped
        ))
    }
}
