use std::fs;
use std::path::{Path, PathBuf};

use portfolio_core::model::{CatalogDraft, StaticCatalog};

use crate::error::CatalogLoadError;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Where the static catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    #[default]
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the file cannot be read, is not valid JSON,
    /// or fails catalog validation.
    pub fn load(&self) -> Result<StaticCatalog, CatalogLoadError> {
        match self {
            CatalogSource::Builtin => builtin_catalog(),
            CatalogSource::File(path) => load_catalog(path),
        }
    }
}

/// Parse and validate the embedded catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the embedded data is invalid.
pub fn builtin_catalog() -> Result<StaticCatalog, CatalogLoadError> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Read a catalog JSON file from disk.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` on read failures, otherwise as `parse_catalog`.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog, CatalogLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), "loaded catalog from file");
    Ok(catalog)
}

/// # Errors
///
/// Returns `CatalogLoadError::Json` or `CatalogLoadError::Invalid`.
pub fn parse_catalog(raw: &str) -> Result<StaticCatalog, CatalogLoadError> {
    let draft: CatalogDraft = serde_json::from_str(raw)?;
    Ok(draft.validate()?)
}
