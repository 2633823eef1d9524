use crate::html::html_escape;
use folio_core::NavLink;

/// Inputs for the site header
#[derive(Debug, Clone)]
pub struct HeaderProps<'a> {
    pub site_title: &'a str,
    /// Target of the home link
    pub header_link: &'a str,
    /// Avatar shown next to the site title
    pub header_image: Option<&'a str>,
    /// Alt text for the avatar, usually the author's name
    pub image_alt: &'a str,
    pub nav: &'a [NavLink],
    /// Path of the page being rendered, used to mark the active link
    pub current_path: &'a str,
}

impl<'a> HeaderProps<'a> {
    pub fn new(site_title: &'a str, nav: &'a [NavLink], current_path: &'a str) -> Self {
        Self {
            site_title,
            header_link: "/",
            header_image: None,
            image_alt: "",
            nav,
            current_path,
        }
    }
}

/// A nav link is active for its own path and anything below it,
/// so `/blog/` stays highlighted on `/blog/some-post/`.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path.is_empty() {
        return false;
    }
    if link_path == "/" {
        return current_path == "/";
    }
    let link = link_path.trim_end_matches('/');
    current_path == link
        || current_path
            .strip_prefix(link)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Render `<header>` with the home link and navigation
pub fn render_header(props: &HeaderProps<'_>) -> String {
    let avatar_html = match props.header_image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="header-avatar"> "#,
            html_escape(src),
            html_escape(props.image_alt)
        ),
        None => String::new(),
    };

    let nav_html: String = props
        .nav
        .iter()
        .map(|link| {
            let class = if is_active(&link.path, props.current_path) {
                "nav-link active"
            } else {
                "nav-link"
            };
            let label = html_escape(&link.label);
            format!(
                r#"
                <a href="{}" class="{}" aria-label="View {} page">{}</a>"#,
                html_escape(&link.path),
                class,
                html_escape(&link.label.to_lowercase()),
                label
            )
        })
        .collect();

    let home_class = if props.header_image.is_some() {
        "home-link with-avatar"
    } else {
        "home-link"
    };

    format!(
        r#"<header class="site-header">
        <div class="container">
            <nav>
                <a href="{}" class="{}" aria-label="go to homepage">{}<span>{}</span></a>
                <div class="nav-links">{}
                </div>
            </nav>
        </div>
    </header>"#,
        html_escape(props.header_link),
        home_class,
        avatar_html,
        html_escape(props.site_title),
        nav_html
    )
}
