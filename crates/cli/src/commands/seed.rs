//! Seed the product store with sample data.

use tracing::info;

use tangelo_store::config::StoreConfig;
use tangelo_store::db::ProductRepository;
use tangelo_store::seed;

/// Populate the catalogue, skipping stores that already have products.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the product store cannot
/// be written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let products = ProductRepository::new(&config.products_file());

    let created = seed::sample_products(&products)?;
    if created == 0 {
        info!("catalogue already populated, nothing to do");
    } else {
        info!(created, path = %config.products_file().display(), "catalogue seeded");
    }

    Ok(())
}
