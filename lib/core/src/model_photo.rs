//! Stock model photos offered for virtual try-on

use serde::Serialize;
use crate::{CatalogItem, Gender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPhoto {
    pub id: &'static str,
    pub path: &'static str,
    pub alt: &'static str,
    pub gender: Gender,
    pub categories: &'static [&'static str],
}

impl ModelPhoto {
    fn fits_category(&self, category: &str) -> bool {
        self.categories.contains(&category)
    }
}

pub const MODEL_PHOTOS: &[ModelPhoto] = &[
    ModelPhoto {
        id: "woman_full",
        path: "/images/models/woman.png",
        alt: "Female model",
        gender: Gender::Women,
        categories: &["Clothes"],
    },
    ModelPhoto {
        id: "man_full",
        path: "/images/models/man.png",
        alt: "Male model",
        gender: Gender::Men,
        categories: &["Clothes"],
    },
    ModelPhoto {
        id: "woman_shoes",
        path: "/images/models/woman_shoes.png",
        alt: "Female model for shoes",
        gender: Gender::Women,
        categories: &["Shoes"],
    },
    ModelPhoto {
        id: "man_shoes",
        path: "/images/models/man_shoes.png",
        alt: "Male model for shoes",
        gender: Gender::Men,
        categories: &["Shoes"],
    },
    ModelPhoto {
        id: "woman_bags",
        path: "/images/models/woman_bags.png",
        alt: "Female model for bags",
        gender: Gender::Women,
        categories: &["Bags"],
    },
    ModelPhoto {
        id: "man_bags",
        path: "/images/models/man_bags.png",
        alt: "Male model for bags",
        gender: Gender::Men,
        categories: &["Bags"],
    },
];

/// Pick the model photos suitable for trying on `item`.
///
/// Unisex items get every photo for their category. Otherwise photos must
/// match both category and gender. Either way, when nothing matches the
/// clothes photos are the fallback.
pub fn select_model_photos(item: &CatalogItem) -> Vec<&'static ModelPhoto> {
    let (Some(category), Some(gender)) = (item.category.as_deref(), item.gender.as_ref()) else {
        return Vec::new();
    };

    let category_match: Vec<&'static ModelPhoto> = MODEL_PHOTOS
        .iter()
        .filter(|photo| photo.fits_category(category))
        .collect();

    if *gender == Gender::Unisex {
        if !category_match.is_empty() {
            return category_match;
        }
        return MODEL_PHOTOS
            .iter()
            .filter(|photo| photo.fits_category("Clothes"))
            .collect();
    }

    let specific: Vec<&'static ModelPhoto> = category_match
        .into_iter()
        .filter(|photo| photo.gender == *gender)
        .collect();
    if !specific.is_empty() {
        return specific;
    }

    MODEL_PHOTOS
        .iter()
        .filter(|photo| photo.gender == *gender && photo.fits_category("Clothes"))
        .collect()
}
