//! Catalog sources
//!
//! A source produces the full list of enriched catalog items on demand.
//! The store calls it on startup and on every reload.

use std::fs;
use std::path::{Path, PathBuf};

use lookbook_core::CatalogItem;
use serde::de::DeserializeOwned;

use crate::error::{Result, StorageError};
use crate::export::{enrich, MetadataRow, ProductRow};

pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<CatalogItem>>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Product and metadata exports on local disk, each a JSON array of rows
#[derive(Debug, Clone)]
pub struct FileSource {
    products: PathBuf,
    metadata: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>, M: AsRef<Path>>(products: P, metadata: M) -> Self {
        Self {
            products: products.as_ref().to_path_buf(),
            metadata: metadata.as_ref().to_path_buf(),
        }
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = fs::read(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Vec<CatalogItem>> {
        let products: Vec<ProductRow> = read_rows(&self.products)?;
        let metadata: Vec<MetadataRow> = read_rows(&self.metadata)?;
        Ok(enrich(products, metadata))
    }

    fn describe(&self) -> String {
        format!("{} + {}", self.products.display(), self.metadata.display())
    }
}

/// An in-memory item list, already enriched
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<CatalogItem>);

impl CatalogSource for StaticSource {
    fn load(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} items)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_file_source_loads_enriched_items() {
        let dir = TempDir::new().unwrap();
        let products = write(
            &dir,
            "products.json",
            json!([
                {"product_id": "1", "product_url": "u1", "product_embedding": "[1, 0]"},
                {"product_id": "2", "product_url": "u2", "product_embedding": "[0, 1]"}
            ]),
        );
        let metadata = write(
            &dir,
            "metadata.json",
            json!([{"PRODUCT_ID": "1", "CATEGORY": "Bags", "PRODUCT_GENDER": "Men"}]),
        );

        let items = FileSource::new(&products, &metadata).load().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category.as_deref(), Some("Bags"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let metadata = write(&dir, "metadata.json", json!([]));

        let err = FileSource::new(&missing, &metadata).load().unwrap_err();
        match err {
            StorageError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let products = dir.path().join("products.json");
        fs::write(&products, b"{not json").unwrap();
        let metadata = write(&dir, "metadata.json", json!([]));

        let err = FileSource::new(&products, &metadata).load().unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }
}
