//! Catalog loading functionality

use super::{Catalog, CatalogBuildResult};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Builds the catalog from `path`, or from the embedded data file when no path is given.
/// Malformed data is an error, integrity problems are returned alongside the catalog.
pub fn build_catalog(path: Option<&Path>) -> Result<CatalogBuildResult> {
    match path {
        Some(path) => {
            info!("Loading catalog from {:?}...", path);
            Catalog::from_json_file(path)
                .with_context(|| format!("Could not load catalog from {:?}", path))
        }
        None => {
            info!("Loading embedded catalog...");
            Catalog::embedded().context("Could not load embedded catalog")
        }
    }
}

/// Like [`build_catalog`], logging the build report and keeping only the catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let result = build_catalog(path)?;
    for line in result.report_lines() {
        info!("{}", line);
    }
    Ok(result.catalog)
}
