use crate::html::{html_escape, markdown_to_escaped_html};
use folio_core::Hero;

/// Render the hero banner.
///
/// `background` is a CSS `background-image` value and is emitted as an inline
/// style when non-empty. `image` is shown as a separate block that the
/// stylesheet only reveals on narrow screens.
pub fn render_hero(title: &str, hero: &Hero) -> String {
    let section_style = if hero.background.is_empty() {
        String::new()
    } else {
        format!(
            r#" style="background-image: {}""#,
            html_escape(&hero.background)
        )
    };

    let image_html = if hero.image.is_empty() {
        String::new()
    } else {
        format!(
            r#"
            <div class="hero-image" style="background-image: url({})"></div>"#,
            html_escape(&hero.image)
        )
    };

    let text_html = match hero.text.as_deref() {
        Some(text) if !text.trim().is_empty() => format!(
            r#"
                <div class="hero-text">{}</div>"#,
            markdown_to_escaped_html(text).trim_end()
        ),
        _ => String::new(),
    };

    format!(
        r#"<section class="hero"{}>
        <div class="container">{}
            <div class="hero-body">
                <h1>{}</h1>{}
            </div>
        </div>
    </section>"#,
        section_style,
        image_html,
        html_escape(title),
        text_html
    )
}
