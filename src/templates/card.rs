//! Card renderer - one category becomes one card

use crate::catalog::{Category, Group, Link};
use crate::config::SiteConfig;
use crate::helpers::{html_escape, is_absolute_url, join_root};

/// Renders categories as cards. Output depends only on the root and the category.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    root: String,
}

impl CardRenderer {
    /// Create a renderer resolving link paths against `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Create a renderer for the site's base_url
    pub fn for_site(config: &SiteConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Render a single category card
    pub fn render(&self, card: &Category) -> String {
        let color = html_escape(card.color.trim());
        let mut html = String::new();

        html.push_str(&format!(
            "<div class=\"card\" style=\"color: {}\">\n",
            color
        ));
        html.push_str(&format!(
            "<div class=\"card-title\">{}</div>\n",
            html_escape(&card.title)
        ));
        html.push_str(&format!(
            "<div class=\"card-content\" style=\"border-color: {}\">\n",
            color
        ));
        for group in &card.blocks {
            self.render_group(&mut html, group, &color);
        }
        html.push_str("</div>\n</div>\n");

        html
    }

    fn render_group(&self, html: &mut String, group: &Group, color: &str) {
        html.push_str("<div class=\"block\">\n");
        html.push_str(&format!(
            "<div class=\"block-title\">{}</div>\n",
            html_escape(&group.title)
        ));
        for link in &group.content {
            html.push_str(&self.render_link(link, color));
            html.push('\n');
        }
        html.push_str("</div>\n");
    }

    fn render_link(&self, link: &Link, color: &str) -> String {
        let open = match link.destination() {
            Some(dest) if is_absolute_url(dest) => format!(
                r#"<a class="card-link" href="{}" target="_blank" rel="noopener">"#,
                html_escape(dest)
            ),
            Some(dest) => format!(
                r#"<a class="card-link" href="{}">"#,
                html_escape(&join_root(&self.root, dest))
            ),
            None => r#"<a class="card-link" aria-disabled="true">"#.to_string(),
        };

        format!(
            r#"{}<span class="link" style="color: {}">{}</span></a>"#,
            open,
            color,
            html_escape(&link.title)
        )
    }
}
