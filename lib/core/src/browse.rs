//! Catalog browsing: attribute filters, filter options, pagination

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::{CatalogItem, Error, Filter, Gender, Result};

/// Categories shown in the browsable gallery
pub const BROWSE_CATEGORIES: &[&str] = &["Bags", "Clothes", "Shoes"];

/// Genders shown in the browsable gallery
pub const BROWSE_GENDERS: &[Gender] = &[Gender::Men, Gender::Women];

pub const DEFAULT_PAGE_SIZE: usize = 30;

/// True when an item belongs in the gallery at all
pub fn is_browsable(item: &CatalogItem) -> bool {
    let category_ok = item
        .category
        .as_deref()
        .is_some_and(|c| BROWSE_CATEGORIES.contains(&c));
    let gender_ok = item
        .gender
        .as_ref()
        .is_some_and(|g| BROWSE_GENDERS.contains(g));
    category_ok && gender_ok
}

/// User-selected attribute filters. Empty or absent means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseFilter {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl BrowseFilter {
    pub fn is_empty(&self) -> bool {
        [&self.brand, &self.category, &self.subcategory, &self.gender]
            .iter()
            .all(|v| selected(v).is_none())
    }

    /// Browsable items matching this filter, in catalog order
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a CatalogItem>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

impl Filter for BrowseFilter {
    fn matches(&self, item: &CatalogItem) -> bool {
        if !is_browsable(item) {
            return false;
        }
        field_matches(&self.brand, item.brand.as_deref())
            && field_matches(&self.category, item.category.as_deref())
            && field_matches(&self.subcategory, item.subcategory.as_deref())
            && field_matches(&self.gender, item.gender.as_ref().map(Gender::as_str))
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn field_matches(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match selected(wanted) {
        None => true,
        Some(w) => actual == Some(w),
    }
}

/// Distinct, sorted values for each filter dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterOptions {
    /// Options are drawn from browsable items only
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        let mut brands = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut subcategories = BTreeSet::new();
        let mut genders = BTreeSet::new();

        for item in items.into_iter().filter(|i| is_browsable(i)) {
            insert_present(&mut brands, item.brand.as_deref());
            insert_present(&mut categories, item.category.as_deref());
            insert_present(&mut subcategories, item.subcategory.as_deref());
            insert_present(&mut genders, item.gender.as_ref().map(Gender::as_str));
        }

        Self {
            brands: brands.into_iter().collect(),
            categories: categories.into_iter().collect(),
            subcategories: subcategories.into_iter().collect(),
            genders: genders.into_iter().collect(),
        }
    }
}

fn insert_present(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        set.insert(v.to_string());
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Slice out a zero-based page. Out-of-range pages come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(Error::InvalidConfig("page_size must be positive".to_string()));
    }
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = page.saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Ok(Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    })
}
