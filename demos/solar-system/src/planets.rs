//! The eight-planet catalog.
//!
//! Distances and speeds are stage units tuned for readability, not
//! astronomy: real scales would put Neptune sub-pixel or off-screen.

use orrery_engine::{CatalogError, SystemCatalog};

/// Embedded catalog; parsed once at startup.
pub const CATALOG_JSON: &str = include_str!("planets.json");

/// Parse the embedded catalog.
pub fn load() -> Result<SystemCatalog, CatalogError> {
    SystemCatalog::from_json(CATALOG_JSON)
}
