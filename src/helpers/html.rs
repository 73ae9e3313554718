//! HTML helper functions

use super::url::{is_absolute_url, url_for};
use crate::config::SiteConfig;

/// Generate an anchor tag. Absolute URLs open in a new tab.
///
/// # Examples
/// ```ignore
/// link_to(&config, "/blog", "Blog") // -> <a href="/devoops/blog">Blog</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    let href = html_escape(&url_for(config, path));

    if is_absolute_url(path) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            href,
            html_escape(text)
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, href, html_escape(text))
    }
}

/// Generate an image tag
pub fn image_tag(config: &SiteConfig, path: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(&url_for(config, path)),
        html_escape(alt)
    )
}

/// Generate a favicon link tag
pub fn favicon_tag(config: &SiteConfig, path: &str) -> String {
    format!(
        r#"<link rel="icon" href="{}">"#,
        html_escape(&url_for(config, path))
    )
}

/// Generate a meta description tag
pub fn meta_description(description: &str) -> String {
    format!(
        r#"<meta name="description" content="{}">"#,
        html_escape(description)
    )
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="devoops {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Embed a JSON value in a `<script type="application/json">` block
pub fn json_script(id: &str, value: &serde_json::Value) -> String {
    // `</` would close the script element early
    let json = value.to_string().replace("</", "<\\/");
    format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        html_escape(id),
        json
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
