//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::catalog::loader::CatalogLoader;
use crate::Site;

/// Print site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    print!("{}", render(site, content_type)?);
    Ok(())
}

/// Format site content by type
pub fn render(site: &Site, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "category" | "categories" => {
            let catalog = CatalogLoader::new(site).load()?;
            writeln!(out, "Categories ({}):", catalog.len())?;
            for card in &catalog {
                writeln!(
                    out,
                    "  {} [{}] ({} groups, {} links)",
                    card.title,
                    card.color,
                    card.blocks.len(),
                    card.links().count()
                )?;
            }
        }
        "group" | "groups" => {
            let catalog = CatalogLoader::new(site).load()?;
            writeln!(out, "Groups ({}):", catalog.group_count())?;
            for card in &catalog {
                for group in &card.blocks {
                    writeln!(
                        out,
                        "  {} / {} ({})",
                        card.title,
                        group.title,
                        group.content.len()
                    )?;
                }
            }
        }
        "link" | "links" => {
            let catalog = CatalogLoader::new(site).load()?;
            writeln!(out, "Links ({}):", catalog.link_count())?;
            for card in &catalog {
                for group in &card.blocks {
                    for link in &group.content {
                        writeln!(
                            out,
                            "  {} / {} / {} -> {}",
                            card.title,
                            group.title,
                            link.title,
                            link.link.as_deref().unwrap_or("-")
                        )?;
                    }
                }
            }
        }
        "placeholder" | "placeholders" => {
            let catalog = CatalogLoader::new(site).load()?;
            writeln!(out, "Placeholders ({}):", catalog.placeholder_count())?;
            for card in &catalog {
                for group in &card.blocks {
                    for link in group.content.iter().filter(|l| l.is_placeholder()) {
                        writeln!(out, "  {} / {} / {}", card.title, group.title, link.title)?;
                    }
                }
            }
        }
        "nav" | "navbar" => {
            let items = site.config.nav_items();
            writeln!(out, "Navbar ({}):", items.len())?;
            for item in &items {
                writeln!(
                    out,
                    "  {} -> {} [{:?}]",
                    item.label,
                    item.target().unwrap_or("-"),
                    item.position
                )?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: categories, groups, links, placeholders, nav",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_list_categories() {
        let (_dir, site) = site();
        let out = render(&site, "categories").unwrap();
        assert!(out.starts_with("Categories (12):\n"));
        assert!(out.contains("  Mobile [#2f9e44] (1 groups, 0 links)\n"));
    }

    #[test]
    fn test_list_links_and_placeholders() {
        let (_dir, site) = site();
        let links = render(&site, "links").unwrap();
        assert!(links.contains("  Front-end / React / Suspense -> /docs/frontend/react/suspense\n"));
        assert!(links.contains("  Database / NoSQL / Redis -> -\n"));

        let placeholders = render(&site, "placeholders").unwrap();
        assert!(placeholders.starts_with("Placeholders (33):\n"));
        assert!(!placeholders.contains("Suspense"));
    }

    #[test]
    fn test_list_nav_includes_repository() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = crate::config::SiteConfig::default();
        config.organization_name = "chen-wenyi".to_string();
        config.project_name = "devoops".to_string();
        let site = Site::with_config(dir.path().to_path_buf(), config);

        let out = render(&site, "nav").unwrap();
        assert_eq!(
            out,
            "Navbar (1):\n  GitHub -> https://github.com/chen-wenyi/devoops [Right]\n"
        );
    }

    #[test]
    fn test_unknown_type() {
        let (_dir, site) = site();
        let err = render(&site, "posts").unwrap_err();
        assert!(err.to_string().starts_with("Unknown type: posts"));
    }
}
