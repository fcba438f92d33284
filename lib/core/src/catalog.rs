use crate::{CatalogItem, Error, ItemId, Result};
use ahash::AHashMap;

/// Read-only access to a catalog snapshot.
///
/// Ranking and browsing only ever borrow through this trait, so a caller can
/// hand in a [`Catalog`] or a plain slice of items.
///
/// Slices and `Vec`s have an inherent `get(usize)` that shadows
/// [`CatalogView::get`]; call it as `CatalogView::get(&items, &id)` there.
pub trait CatalogView {
    /// All items in insertion order
    fn items(&self) -> &[CatalogItem];

    /// Look up an item by identity
    fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items().iter().find(|item| &item.id == id)
    }

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl CatalogView for [CatalogItem] {
    fn items(&self) -> &[CatalogItem] {
        self
    }
}

impl CatalogView for Vec<CatalogItem> {
    fn items(&self) -> &[CatalogItem] {
        self.as_slice()
    }
}

/// A flat, insertion-ordered collection of catalog items keyed by identity.
///
/// A catalog is never mutated after construction. Reloading builds a new one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: AHashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identities
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(Error::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of an item in insertion order
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Number of items carrying an embedding
    pub fn embedded_count(&self) -> usize {
        self.items.iter().filter(|item| item.has_embedding()).count()
    }
}

impl CatalogView for Catalog {
    fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("a").with_embedding(vec![1.0, 0.0]),
            CatalogItem::new("b"),
            CatalogItem::new(7u64).with_embedding(vec![0.0, 1.0]),
        ]
    }

    #[test]
    fn test_catalog_preserves_order_and_indexes() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position(&ItemId::from("b")), Some(1));
        assert_eq!(catalog.get(&ItemId::Integer(7)).unwrap().id, ItemId::Integer(7));
        assert_eq!(catalog.embedded_count(), 2);

        let ids: Vec<String> = catalog.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "7"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut items = sample();
        items.push(CatalogItem::new("a"));
        assert!(matches!(Catalog::new(items), Err(Error::DuplicateItem(_))));
    }

    #[test]
    fn test_slice_view_linear_lookup() {
        let items = sample();
        let view: &[CatalogItem] = &items;
        assert!(CatalogView::get(view, &ItemId::from("a")).is_some());
        assert!(CatalogView::get(view, &ItemId::from("missing")).is_none());
        assert_eq!(CatalogView::get(&items, &ItemId::Integer(7)).map(|i| i.has_embedding()), Some(true));
        assert!(!CatalogView::is_empty(view));
    }
}
