//! Generator module - writes the static site to the public directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::templates::TemplateRenderer;
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            site: site.clone(),
            renderer: TemplateRenderer::new(&site.config),
        }
    }

    /// Render the home page without writing it
    pub fn render_home(&self, catalog: &Catalog) -> String {
        self.renderer.render_home(catalog)
    }

    /// Generate the entire site
    pub fn generate(&self, catalog: &Catalog) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.site.public_dir))?;

        // Static assets first so generated files win on name clashes
        let copied = self.copy_static_assets()?;
        if copied > 0 {
            tracing::info!("Copied {} static files", copied);
        }

        self.generate_home_page(catalog)?;
        self.generate_catalog_json(catalog)?;

        Ok(())
    }

    fn generate_home_page(&self, catalog: &Catalog) -> Result<()> {
        let html = self.render_home(catalog);
        write_file(&self.site.public_dir.join("index.html"), &html)?;
        tracing::info!("Generated index.html with {} cards", catalog.len());
        Ok(())
    }

    fn generate_catalog_json(&self, catalog: &Catalog) -> Result<()> {
        let json = serde_json::to_string_pretty(catalog)?;
        write_file(&self.site.public_dir.join("catalog.json"), &json)?;
        tracing::debug!("Generated catalog.json");
        Ok(())
    }

    /// Copy everything under the static directory into the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
            copied += 1;
        }

        Ok(copied)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn test_generate_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        Generator::new(&site).generate(builtin()).unwrap();

        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(index.contains("<div class=\"card-title\">Fundamentals</div>"));

        let json = fs::read_to_string(site.public_dir.join("catalog.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), builtin().len());
        assert_eq!(value[0]["title"], "Fundamentals");
        assert!(value[0]["blocks"][0]["content"][0].get("link").is_none());
    }

    #[test]
    fn test_copies_static_assets() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("static/img/icon");
        fs::create_dir_all(&icons).unwrap();
        fs::write(icons.join("favicon.svg"), "<svg/>").unwrap();

        let site = Site::new(dir.path()).unwrap();
        Generator::new(&site).generate(builtin()).unwrap();

        let copied = site.public_dir.join("img/icon/favicon.svg");
        assert_eq!(fs::read_to_string(copied).unwrap(), "<svg/>");
    }

    #[test]
    fn test_generated_page_matches_render() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let generator = Generator::new(&site);
        generator.generate(builtin()).unwrap();

        let written = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert_eq!(written, generator.render_home(builtin()));
    }
}
