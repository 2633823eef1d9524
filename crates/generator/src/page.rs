use crate::components::{HeaderProps, render_header, render_hero};
use crate::html::{html_escape, markdown_to_html};
use crate::seo;
use folio_core::{Page, PageMetadata, Result, Site};

/// Render a complete HTML document for one page.
///
/// `body_markdown` is the page content, already read from disk by the caller.
pub fn render_page(site: &Site, page: &Page, body_markdown: Option<&str>) -> Result<String> {
    let meta = PageMetadata::for_page(site, page);
    let current_path = page.path();

    let seo_head = seo::render_head(&meta)?;

    let mut header_props = HeaderProps::new(&site.info.title, &site.nav, &current_path);
    header_props.header_image = site.info.avatar.as_deref();
    header_props.image_alt = site.author.name.as_str();
    let header_html = render_header(&header_props);

    let hero_html = match &page.hero {
        Some(hero) => render_hero(&page.title, hero),
        None => String::new(),
    };

    let content_html = body_markdown.map(markdown_to_html).unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{}</head>
<body>
    {}
    {}
    <main class="content">
{}    </main>
</body>
</html>
"#,
        html_escape(&site.info.language),
        seo_head,
        header_html,
        hero_html,
        content_html
    ))
}
