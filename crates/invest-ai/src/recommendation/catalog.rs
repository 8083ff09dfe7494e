//! Listing-catalog import from CSV exports, used by the CLI demo commands.
//! Columns follow the catalog's camelCase header names; missing columns
//! fall back to field defaults, and fund brackets are derived as part of
//! the import.

use std::io::Read;
use std::path::Path;

use super::domain::{normalize_catalog, Listing};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a catalog CSV from disk and normalizes every listing.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Listing>, CatalogError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

/// Reads a catalog CSV from any reader and normalizes every listing.
pub fn from_reader(reader: impl Read) -> Result<Vec<Listing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut listings = Vec::new();
    for row in csv_reader.deserialize::<Listing>() {
        listings.push(row?);
    }

    Ok(normalize_catalog(listings))
}
