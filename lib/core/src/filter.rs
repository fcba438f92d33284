//! Candidate eligibility rules
//!
//! Decides which catalog items may be scored against an anchor. The rules
//! run in a fixed order and the first one that fails is reported.

use serde::Serialize;
use crate::{CatalogItem, CatalogView, Gender};

pub trait Filter {
    fn matches(&self, item: &CatalogItem) -> bool;
}

/// Why an item was not eligible as a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
    /// The item is the anchor itself
    SelfMatch,
    /// The item cannot be scored
    NoEmbedding,
    /// Gender missing on either side, or different
    GenderMismatch,
    /// Variant of the anchor's base product
    SameGroup,
}

/// Per-rule tally of excluded items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionCounts {
    pub self_match: usize,
    pub no_embedding: usize,
    pub gender_mismatch: usize,
    pub same_group: usize,
}

impl ExclusionCounts {
    pub fn record(&mut self, exclusion: Exclusion) {
        match exclusion {
            Exclusion::SelfMatch => self.self_match += 1,
            Exclusion::NoEmbedding => self.no_embedding += 1,
            Exclusion::GenderMismatch => self.gender_mismatch += 1,
            Exclusion::SameGroup => self.same_group += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.self_match + self.no_embedding + self.gender_mismatch + self.same_group
    }
}

/// Eligibility filter bound to one anchor
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    anchor: &'a CatalogItem,
}

impl<'a> CandidateFilter<'a> {
    pub fn for_anchor(anchor: &'a CatalogItem) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> &'a CatalogItem {
        self.anchor
    }

    /// First rule the item fails, or `None` if it is eligible
    pub fn rejection(&self, item: &CatalogItem) -> Option<Exclusion> {
        if item.id == self.anchor.id {
            return Some(Exclusion::SelfMatch);
        }
        if item.embedding.is_none() {
            return Some(Exclusion::NoEmbedding);
        }
        if !same_gender(self.anchor.gender.as_ref(), item.gender.as_ref()) {
            return Some(Exclusion::GenderMismatch);
        }
        match (&self.anchor.group_code, &item.group_code) {
            (Some(anchor_group), Some(group)) if anchor_group == group => {
                Some(Exclusion::SameGroup)
            }
            _ => None,
        }
    }

    /// Eligible items in catalog order
    pub fn eligible<'v, V>(&'v self, view: &'v V) -> impl Iterator<Item = &'v CatalogItem> + 'v
    where
        V: CatalogView + ?Sized,
    {
        view.items().iter().filter(move |item| self.matches(item))
    }

    /// Eligible items in catalog order, plus a tally of everything excluded
    pub fn partition<'v, V>(&self, view: &'v V) -> (Vec<&'v CatalogItem>, ExclusionCounts)
    where
        V: CatalogView + ?Sized,
    {
        let mut counts = ExclusionCounts::default();
        let mut eligible = Vec::with_capacity(view.len());
        for item in view.items() {
            match self.rejection(item) {
                Some(exclusion) => counts.record(exclusion),
                None => eligible.push(item),
            }
        }
        (eligible, counts)
    }
}

impl Filter for CandidateFilter<'_> {
    fn matches(&self, item: &CatalogItem) -> bool {
        self.rejection(item).is_none()
    }
}

fn same_gender(anchor: Option<&Gender>, candidate: Option<&Gender>) -> bool {
    match (anchor, candidate) {
        (Some(a), Some(c)) => a == c,
        (None, _) | (_, None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemId;

    fn item(id: &str, gender: Option<&str>, group: Option<&str>) -> CatalogItem {
        let mut item = CatalogItem::new(id).with_embedding(vec![1.0, 0.0, 0.0]);
        item.gender = gender.map(Gender::from);
        item.group_code = group.map(str::to_string);
        item
    }

    #[test]
    fn test_self_is_excluded() {
        let anchor = item("a", Some("Women"), None);
        let filter = CandidateFilter::for_anchor(&anchor);
        assert_eq!(filter.rejection(&anchor.clone()), Some(Exclusion::SelfMatch));
    }

    #[test]
    fn test_missing_embedding_excluded() {
        let anchor = item("a", Some("Women"), None);
        let mut candidate = item("b", Some("Women"), None);
        candidate.embedding = None;
        let filter = CandidateFilter::for_anchor(&anchor);
        assert_eq!(filter.rejection(&candidate), Some(Exclusion::NoEmbedding));
    }

    #[test]
    fn test_gender_must_match_and_be_present() {
        let anchor = item("a", Some("Women"), None);
        let filter = CandidateFilter::for_anchor(&anchor);

        assert!(filter.matches(&item("b", Some("Women"), None)));
        assert_eq!(
            filter.rejection(&item("c", Some("Men"), None)),
            Some(Exclusion::GenderMismatch)
        );
        assert_eq!(
            filter.rejection(&item("d", None, None)),
            Some(Exclusion::GenderMismatch)
        );

        let genderless = item("e", None, None);
        let filter = CandidateFilter::for_anchor(&genderless);
        assert_eq!(
            filter.rejection(&item("f", None, None)),
            Some(Exclusion::GenderMismatch)
        );
    }

    #[test]
    fn test_group_code_suppresses_variants() {
        let anchor = item("a", Some("Men"), Some("G1"));
        let filter = CandidateFilter::for_anchor(&anchor);

        assert_eq!(
            filter.rejection(&item("b", Some("Men"), Some("G1"))),
            Some(Exclusion::SameGroup)
        );
        assert!(filter.matches(&item("c", Some("Men"), Some("G2"))));
        assert!(filter.matches(&item("d", Some("Men"), None)));
    }

    #[test]
    fn test_anchor_without_group_skips_rule() {
        let anchor = item("a", Some("Men"), None);
        let filter = CandidateFilter::for_anchor(&anchor);
        assert!(filter.matches(&item("b", Some("Men"), Some("G1"))));
    }

    #[test]
    fn test_partition_counts_and_order() {
        let anchor = item("a", Some("Women"), Some("G"));
        let mut no_vec = item("n", Some("Women"), None);
        no_vec.embedding = None;
        let items = vec![
            item("z", Some("Women"), None),
            anchor.clone(),
            item("m", Some("Men"), None),
            no_vec,
            item("g", Some("Women"), Some("G")),
            item("y", Some("Women"), Some("H")),
        ];

        let filter = CandidateFilter::for_anchor(&anchor);
        let (eligible, counts) = filter.partition(&items);

        let ids: Vec<&ItemId> = eligible.iter().map(|i| &i.id).collect();
        assert_eq!(ids, vec![&ItemId::from("z"), &ItemId::from("y")]);
        assert_eq!(counts.self_match, 1);
        assert_eq!(counts.no_embedding, 1);
        assert_eq!(counts.gender_mismatch, 1);
        assert_eq!(counts.same_group, 1);
        assert_eq!(counts.total(), 4);

        assert_eq!(filter.eligible(&items).count(), 2);
    }
}
