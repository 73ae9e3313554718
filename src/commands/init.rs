//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::catalog::builtin;

const CONFIG_TEMPLATE: &str = r#"# Site
title: DevOops
tagline: Oops Happens - We Document It.
description: ''
favicon: img/icon/favicon.ico
language: en

# URL
url: https://example.com
base_url: /

# Deployment
organization_name: chen-wenyi
project_name: devoops

# Directory
source_dir: source
public_dir: public
static_dir: static

# Navbar
navbar:
  title: DevOops
  logo:
    alt: DevOops Logo
    src: img/icon/favicon.svg
  hide_on_scroll: true
  items:
    - label: Docs
      to: /docs/intro
      position: left
    - label: Blog
      to: /blog
      position: left

# Color mode
color_mode:
  default_mode: light
  disable_switch: false
  respect_prefers_color_scheme: true

# Hosted search (Algolia DocSearch). Use the public search-only key.
# search:
#   app_id: ''
#   api_key: ''
#   index_name: ''
#   contextual_search: true
#   search_page_path: search
#   insights: false
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists, refusing to overwrite", config_path);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("source/_data"))?;
    fs::create_dir_all(target_dir.join("static/img/icon"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    // Seed the card data with the built-in catalog
    let cards_path = target_dir.join("source/_data/cards.yml");
    if !cards_path.exists() {
        let cards = serde_yaml::to_string(builtin())?;
        fs::write(&cards_path, cards)
            .with_context(|| format!("Failed to write {:?}", cards_path))?;
    }

    Ok(())
}
