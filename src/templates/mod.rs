//! Built-in page templates
//!
//! The home page is assembled from a fixed layout: head, navbar, hero
//! header and the card container. Cards come from [`CardRenderer`].

mod card;

pub use card::CardRenderer;

use crate::catalog::Catalog;
use crate::config::{NavItem, NavPosition, SiteConfig};
use crate::helpers::{
    favicon_tag, full_url_for, html_escape, image_tag, json_script, link_to, meta_description,
    meta_generator, url_for,
};

/// Page renderer for a site configuration
pub struct TemplateRenderer {
    config: SiteConfig,
    cards: CardRenderer,
}

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
            cards: CardRenderer::for_site(config),
        }
    }

    /// Render the home page with every card of the catalog
    pub fn render_home(&self, catalog: &Catalog) -> String {
        let config = &self.config;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!(
            "<html lang=\"{}\" data-theme=\"{}\"{}>\n",
            html_escape(&config.language),
            config.color_mode.default_mode.as_str(),
            if config.color_mode.disable_switch {
                " data-theme-switch=\"disabled\""
            } else {
                ""
            }
        ));
        html.push_str(&self.head());
        html.push_str("<body>\n");
        html.push_str(&self.navbar());
        html.push_str(&self.hero());
        html.push_str("<main>\n<div class=\"card-container\">\n");
        for card in catalog {
            html.push_str(&self.cards.render(card));
        }
        html.push_str("</div>\n</main>\n</body>\n</html>\n");

        html
    }

    fn head(&self) -> String {
        let config = &self.config;
        let color_scheme = if config.color_mode.respect_prefers_color_scheme {
            "light dark"
        } else {
            config.color_mode.default_mode.as_str()
        };

        let mut tags = vec![
            "<meta charset=\"utf-8\">".to_string(),
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
            format!("<title>Hello from {}</title>", html_escape(&config.title)),
            format!("<meta name=\"color-scheme\" content=\"{}\">", color_scheme),
            meta_generator(),
        ];

        if !config.description.is_empty() {
            tags.push(meta_description(&config.description));
        }
        if !config.favicon.is_empty() {
            tags.push(favicon_tag(config, &config.favicon));
        }
        tags.push(format!(
            "<link rel=\"canonical\" href=\"{}\">",
            html_escape(&full_url_for(config, "/"))
        ));
        if let Some(search) = &config.search {
            tags.push(json_script("docsearch-config", &search.to_client_json()));
        }

        format!("<head>\n{}\n</head>\n", tags.join("\n"))
    }

    fn navbar(&self) -> String {
        let config = &self.config;
        let navbar = &config.navbar;
        let mut html = String::new();

        html.push_str(if navbar.hide_on_scroll {
            "<nav class=\"navbar navbar--hideable\">\n"
        } else {
            "<nav class=\"navbar\">\n"
        });
        html.push_str("<div class=\"navbar__inner\">\n<div class=\"navbar__items\">\n");

        html.push_str(&format!(
            "<a class=\"navbar__brand\" href=\"{}\">",
            html_escape(&url_for(config, "/"))
        ));
        if let Some(logo) = &navbar.logo {
            html.push_str(&image_tag(config, &logo.src, &logo.alt));
        }
        html.push_str(&format!(
            "<b class=\"navbar__title\">{}</b></a>\n",
            html_escape(config.navbar_title())
        ));

        let items = config.nav_items();
        for item in items.iter().filter(|i| i.position == NavPosition::Left) {
            html.push_str(&self.nav_item(item));
        }
        html.push_str("</div>\n<div class=\"navbar__items navbar__items--right\">\n");
        for item in items.iter().filter(|i| i.position == NavPosition::Right) {
            html.push_str(&self.nav_item(item));
        }
        if let Some(path) = config
            .search
            .as_ref()
            .and_then(|s| s.search_page_path.as_deref())
        {
            html.push_str(&format!(
                "<div class=\"navbar__search\" data-search-page=\"{}\"></div>\n",
                html_escape(&url_for(config, path))
            ));
        }
        html.push_str("</div>\n</div>\n</nav>\n");

        html
    }

    fn nav_item(&self, item: &NavItem) -> String {
        let html = match item.target() {
            // `href` is used verbatim, never prefixed with the site root
            Some(href) if item.is_external() => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                html_escape(href),
                html_escape(&item.label)
            ),
            Some(to) => link_to(&self.config, to, &item.label),
            None => format!("<span>{}</span>", html_escape(&item.label)),
        };
        format!("<div class=\"navbar__item\">{}</div>\n", html)
    }

    fn hero(&self) -> String {
        format!(
            "<header class=\"hero\">\n<div class=\"container\">\n\
             <h1 class=\"hero__title\">{}</h1>\n\
             <p class=\"hero__subtitle\">{}</p>\n\
             </div>\n</header>\n",
            html_escape(&self.config.title),
            html_escape(&self.config.tagline)
        )
    }
}
