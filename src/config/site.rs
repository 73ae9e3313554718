//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub favicon: String,
    pub language: String,

    // URL
    pub url: String,
    pub base_url: String,

    // Deployment
    pub organization_name: String,
    pub project_name: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Theme
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub color_mode: ColorModeConfig,

    // Hosted search
    pub search: Option<SearchConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            tagline: String::new(),
            description: String::new(),
            favicon: "img/favicon.ico".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            base_url: "/".to_string(),

            organization_name: String::new(),
            project_name: String::new(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            navbar: NavbarConfig::default(),
            color_mode: ColorModeConfig::default(),

            search: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;

        for item in &config.navbar.items {
            if item.target().is_none() {
                tracing::warn!("Navbar item {:?} has neither `to` nor `href`", item.label);
            }
        }

        Ok(config)
    }

    /// Title shown in the navbar brand, falling back to the site title
    pub fn navbar_title(&self) -> &str {
        self.navbar.title.as_deref().unwrap_or(&self.title)
    }

    /// GitHub repository of the site, from `organization_name` and `project_name`
    pub fn repository_url(&self) -> Option<String> {
        let org = self.organization_name.trim();
        let project = self.project_name.trim();
        if org.is_empty() || project.is_empty() {
            return None;
        }
        Some(format!("https://github.com/{}/{}", org, project))
    }

    /// Navbar items in display order. A configured repository gets a right-side
    /// `GitHub` item unless an item already links to it.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let mut items = self.navbar.items.clone();

        if let Some(repo) = self.repository_url() {
            let linked = items
                .iter()
                .any(|i| i.target().map(|t| t.trim_end_matches('/')) == Some(repo.as_str()));
            if !linked {
                items.push(NavItem {
                    label: "GitHub".to_string(),
                    to: None,
                    href: Some(repo),
                    position: NavPosition::Right,
                });
            }
        }

        items
    }
}

/// Navbar configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub title: Option<String>,
    pub logo: Option<LogoConfig>,
    pub hide_on_scroll: bool,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Navbar logo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    #[serde(default)]
    pub alt: String,
    pub src: String,
}

/// A single navbar entry. `to` is a path inside the site, `href` an external URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub position: NavPosition,
}

impl NavItem {
    /// Destination of the item, preferring the internal path
    pub fn target(&self) -> Option<&str> {
        self.to.as_deref().or(self.href.as_deref())
    }

    /// Whether the item leaves the site
    pub fn is_external(&self) -> bool {
        self.to.is_none() && self.href.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// Color mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    pub default_mode: ColorMode,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            default_mode: ColorMode::Light,
            disable_switch: false,
            respect_prefers_color_scheme: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Hosted search (Algolia DocSearch) configuration.
///
/// Only the client side is configured here; the index lives with the
/// search provider. `api_key` must be the public search-only key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    #[serde(default = "default_true")]
    pub contextual_search: bool,
    #[serde(default)]
    pub external_url_regex: Option<String>,
    #[serde(
        default = "default_search_page_path",
        deserialize_with = "deserialize_search_page_path"
    )]
    pub search_page_path: Option<String>,
    #[serde(default)]
    pub insights: bool,
}

fn default_true() -> bool {
    true
}

fn default_search_page_path() -> Option<String> {
    Some("search".to_string())
}

/// `false` or `null` turn the search page off, `true` keeps the default path
fn deserialize_search_page_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PagePath {
        Enabled(bool),
        Path(String),
    }

    Ok(match Option::<PagePath>::deserialize(deserializer)? {
        None | Some(PagePath::Enabled(false)) => None,
        Some(PagePath::Enabled(true)) => default_search_page_path(),
        Some(PagePath::Path(path)) if path.trim().is_empty() => None,
        Some(PagePath::Path(path)) => Some(path),
    })
}

impl SearchConfig {
    /// Client configuration in the camelCase shape DocSearch expects
    pub fn to_client_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "appId": self.app_id,
            "apiKey": self.api_key,
            "indexName": self.index_name,
            "contextualSearch": self.contextual_search,
            "insights": self.insights,
        });
        if let Some(regex) = &self.external_url_regex {
            value["externalUrlRegex"] = serde_json::Value::String(regex.clone());
        }
        value["searchPagePath"] = match &self.search_page_path {
            Some(path) => serde_json::Value::String(path.clone()),
            None => serde_json::Value::Bool(false),
        };
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.public_dir, "public");
        assert!(config.search.is_none());
        assert_eq!(config.color_mode.default_mode, ColorMode::Light);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: DevOops
tagline: Oops Happens
base_url: /devoops
navbar:
  hide_on_scroll: true
  items:
    - label: Blog
      to: /blog
    - label: GitHub
      href: https://github.com/chen-wenyi/devoops
      position: right
color_mode:
  default_mode: dark
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "DevOops");
        assert_eq!(config.base_url, "/devoops");
        assert_eq!(config.public_dir, "public");
        assert!(config.navbar.hide_on_scroll);
        assert_eq!(config.navbar_title(), "DevOops");
        assert_eq!(config.color_mode.default_mode, ColorMode::Dark);

        let items = config.nav_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].position, NavPosition::Left);
        assert!(!items[0].is_external());
        assert_eq!(items[1].label, "GitHub");
        assert_eq!(items[1].position, NavPosition::Right);
        assert!(items[1].is_external());
    }

    #[test]
    fn test_repository_nav_item() {
        let mut config = SiteConfig::default();
        assert!(config.repository_url().is_none());
        assert!(config.nav_items().is_empty());

        config.organization_name = "chen-wenyi".to_string();
        config.project_name = "devoops".to_string();
        assert_eq!(
            config.repository_url().as_deref(),
            Some("https://github.com/chen-wenyi/devoops")
        );

        let items = config.nav_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "GitHub");
        assert_eq!(items[0].position, NavPosition::Right);
        assert!(items[0].is_external());

        // an explicit item for the same repository is not duplicated
        config.navbar.items.push(NavItem {
            label: "Source".to_string(),
            to: None,
            href: Some("https://github.com/chen-wenyi/devoops/".to_string()),
            position: NavPosition::Right,
        });
        let items = config.nav_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Source");
    }

    #[test]
    fn test_search_defaults() {
        let yaml = r#"
search:
  app_id: APP
  api_key: KEY
  index_name: docs
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        let search = config.search.unwrap();
        assert!(search.contextual_search);
        assert!(!search.insights);
        assert_eq!(search.search_page_path.as_deref(), Some("search"));

        let json = search.to_client_json();
        assert_eq!(json["appId"], "APP");
        assert_eq!(json["indexName"], "docs");
        assert_eq!(json["searchPagePath"], "search");
        assert!(json.get("externalUrlRegex").is_none());
    }

    #[test]
    fn test_search_page_can_be_disabled() {
        for value in ["false", "null", "''"] {
            let yaml = format!(
                "search:\n  app_id: APP\n  api_key: KEY\n  index_name: docs\n  search_page_path: {}\n",
                value
            );
            let config: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
            let search = config.search.unwrap();
            assert_eq!(search.search_page_path, None, "{}", value);
            assert_eq!(search.to_client_json()["searchPagePath"], false);
        }

        let yaml = "search:\n  app_id: APP\n  api_key: KEY\n  index_name: docs\n  search_page_path: true\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.unwrap().search_page_path.as_deref(), Some("search"));

        let yaml = "search:\n  app_id: APP\n  api_key: KEY\n  index_name: docs\n  search_page_path: find\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.unwrap().search_page_path.as_deref(), Some("find"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }
}
