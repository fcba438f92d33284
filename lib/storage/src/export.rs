//! Catalog export rows and enrichment
//!
//! The catalog arrives as two exports: product rows carrying the image URL
//! and embedding, and metadata rows carrying brand, category, gender and
//! grouping key. Enrichment joins them on the product id.

use ahash::{AHashMap, AHashSet};
use lookbook_core::{CatalogItem, Embedding, Gender, ItemId};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A row of the product export
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub product_id: Value,
    #[serde(default)]
    pub product_url: String,
    /// Either a JSON-encoded string or an inline array
    #[serde(default)]
    pub product_embedding: Option<Value>,
}

/// A row of the metadata export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataRow {
    #[serde(rename = "PRODUCT_ID", default)]
    pub product_id: Option<Value>,
    #[serde(rename = "BRAND_NAME", default)]
    pub brand_name: Option<String>,
    #[serde(rename = "PRODUCT_NAME", default)]
    pub product_name: Option<String>,
    #[serde(rename = "CATEGORY", default)]
    pub category: Option<String>,
    #[serde(rename = "SUBCATEGORY", default)]
    pub subcategory: Option<String>,
    #[serde(rename = "PRODUCT_GENDER", default)]
    pub product_gender: Option<String>,
    #[serde(rename = "GROUP_CODE", default)]
    pub group_code: Option<String>,
}

/// Normalize a product id to its trimmed string form.
///
/// Ids are large integers in one export and strings in the other, so both
/// sides are keyed by text.
pub fn id_key(value: &Value) -> Option<String> {
    let key = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!key.is_empty()).then_some(key)
}

/// Parse an embedding column. Anything unparseable or empty is absent.
pub fn parse_embedding(value: &Value) -> Option<Embedding> {
    let data: Vec<f32> = match value {
        Value::String(s) => serde_json::from_str(s).ok()?,
        Value::Array(_) => serde_json::from_value(value.clone()).ok()?,
        _ => return None,
    };
    (!data.is_empty()).then(|| Embedding::new(data))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Join product rows with metadata rows.
///
/// Only products with metadata are kept, in product-row order. Later
/// duplicates of a product id are dropped.
pub fn enrich(products: Vec<ProductRow>, metadata: Vec<MetadataRow>) -> Vec<CatalogItem> {
    let mut by_id: AHashMap<String, MetadataRow> = AHashMap::with_capacity(metadata.len());
    for row in metadata {
        if let Some(key) = row.product_id.as_ref().and_then(id_key) {
            by_id.insert(key, row);
        }
    }

    let mut seen = AHashSet::with_capacity(products.len());
    let mut items = Vec::with_capacity(products.len());
    for row in products {
        let Some(key) = id_key(&row.product_id) else {
            continue;
        };
        let Some(meta) = by_id.get(&key) else {
            continue;
        };
        if !seen.insert(key.clone()) {
            warn!(product_id = %key, "duplicate product row skipped");
            continue;
        }

        let meta = meta.clone();
        items.push(CatalogItem {
            id: ItemId::String(key),
            url: row.product_url,
            brand: non_empty(meta.brand_name),
            name: non_empty(meta.product_name),
            category: non_empty(meta.category),
            subcategory: non_empty(meta.subcategory),
            gender: non_empty(meta.product_gender).map(Gender::from),
            group_code: non_empty(meta.group_code),
            embedding: row.product_embedding.as_ref().and_then(parse_embedding),
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn products() -> Vec<ProductRow> {
        serde_json::from_value(json!([
            {"product_id": 9007199254740993u64, "product_url": "https://img/1.jpg", "product_embedding": "[1.0, 0.0, 0.0]"},
            {"product_id": "2", "product_url": "https://img/2.jpg", "product_embedding": [0.0, 1.0, 0.0]},
            {"product_id": "3", "product_url": "https://img/3.jpg", "product_embedding": "not json"},
            {"product_id": "4", "product_url": "https://img/4.jpg"},
            {"product_id": " 2 ", "product_url": "https://img/dup.jpg"}
        ]))
        .unwrap()
    }

    fn metadata() -> Vec<MetadataRow> {
        serde_json::from_value(json!([
            {"PRODUCT_ID": "9007199254740993", "BRAND_NAME": "Acme", "CATEGORY": "Shoes", "PRODUCT_GENDER": "Women", "GROUP_CODE": "G1"},
            {"PRODUCT_ID": 2, "BRAND_NAME": "Bolt", "CATEGORY": "Bags", "PRODUCT_GENDER": "Men", "GROUP_CODE": ""},
            {"PRODUCT_ID": "3", "CATEGORY": "Clothes", "PRODUCT_GENDER": null},
            {"PRODUCT_ID": "", "BRAND_NAME": "Orphan"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_id_key() {
        assert_eq!(id_key(&json!(" 12 ")), Some("12".to_string()));
        assert_eq!(id_key(&json!(12)), Some("12".to_string()));
        assert_eq!(id_key(&json!("")), None);
        assert_eq!(id_key(&json!(null)), None);
    }

    #[test]
    fn test_parse_embedding_forms() {
        assert_eq!(parse_embedding(&json!("[1, 2]")), Some(Embedding::new(vec![1.0, 2.0])));
        assert_eq!(parse_embedding(&json!([0.5])), Some(Embedding::new(vec![0.5])));
        assert_eq!(parse_embedding(&json!("[]")), None);
        assert_eq!(parse_embedding(&json!("garbage")), None);
        assert_eq!(parse_embedding(&json!(3)), None);
    }

    #[test]
    fn test_enrich_joins_and_filters() {
        let items = enrich(products(), metadata());
        let ids: Vec<String> = items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["9007199254740993", "2", "3"]);

        let first = &items[0];
        assert_eq!(first.brand.as_deref(), Some("Acme"));
        assert_eq!(first.gender, Some(Gender::Women));
        assert_eq!(first.group_code.as_deref(), Some("G1"));
        assert_eq!(first.embedding.as_ref().map(|e| e.dim()), Some(3));

        let second = &items[1];
        assert_eq!(second.url, "https://img/2.jpg");
        assert!(second.group_code.is_none());

        let third = &items[2];
        assert!(third.embedding.is_none());
        assert!(third.gender.is_none());
    }
}
