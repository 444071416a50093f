//! Gender classification.
//!
//! Two independent paths exist: the product mapper derives gender from the
//! product's resolved categories, while [`classify_gender`] maps a raw stored
//! value. They are deliberately not merged; callers depend on each separately.

use serde::{Deserialize, Serialize};

use crate::view::CategoryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Mens,
    Womens,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Mens => "mens",
            Gender::Womens => "womens",
            Gender::Unisex => "unisex",
        }
    }
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw stored gender value (`men`/`mens`, `women`/`womens`).
pub fn classify_gender(raw: &str) -> Gender {
    match raw {
        "men" | "mens" => Gender::Mens,
        "women" | "womens" => Gender::Womens,
        _ => Gender::Unisex,
    }
}

/// Gender implied by a product's categories: any mens category wins over any
/// womens category; no match (or no categories) is unisex.
pub fn gender_from_categories(categories: Option<&[CategoryView]>) -> Gender {
    let Some(categories) = categories else {
        return Gender::Unisex;
    };
    let has = |slugs: [&str; 2]| categories.iter().any(|c| slugs.contains(&c.slug.as_str()));
    if has(["mens", "men"]) {
        Gender::Mens
    } else if has(["womens", "women"]) {
        Gender::Womens
    } else {
        Gender::Unisex
    }
}
