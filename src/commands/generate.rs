//! Generate static files

use anyhow::Result;

use crate::catalog::loader::CatalogLoader;
use crate::generator::Generator;
use crate::Site;

/// Load the catalog and generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let catalog = CatalogLoader::new(site).load()?;
    tracing::info!(
        "Loaded {} categories ({} groups, {} links, {} placeholders)",
        catalog.len(),
        catalog.group_count(),
        catalog.link_count(),
        catalog.placeholder_count()
    );

    Generator::new(site).generate(&catalog)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
