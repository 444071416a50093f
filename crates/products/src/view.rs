//! Frontend view models.
//!
//! Built fresh from store records for every render and never mutated
//! afterwards. Serialized with camelCase keys for presentation code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use storefront_catalog::Collection;

use crate::gender::Gender;
use crate::stock::StockStatus;

/// Placeholder shown until the pricing service resolves the real price.
pub const PRICE_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: String,
    pub collection_id: String,
    pub collection_name: Collection,
    pub title: String,
    pub name: String,
    pub slug: String,
    /// Resolved URL; absent rather than empty when no image is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_visible: bool,
    pub sort_order: i64,
}

impl Default for CategoryView {
    fn default() -> Self {
        Self {
            id: String::new(),
            collection_id: String::new(),
            collection_name: Collection::Categories,
            title: String::new(),
            name: String::new(),
            slug: String::new(),
            image: None,
            is_visible: false,
            sort_order: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantView {
    pub id: String,
    pub collection_id: String,
    pub collection_name: Collection,
    pub product: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_swatch: Option<String>,
    pub size: String,
    pub sku: String,
    pub gallery_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub stock_quantity: i64,
    pub stock_status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    /// Slug when present, otherwise the record id.
    pub id: String,
    pub collection_id: String,
    pub collection_name: Collection,

    pub title: String,
    pub slug: String,
    pub description: String,

    pub price: String,
    pub price_value: f64,
    pub image: String,
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryView>>,
    pub category_ids: Vec<String>,

    pub attributes: Map<String, Value>,

    pub is_feature: bool,
    pub has_variants: bool,
    pub stock_status: StockStatus,
    pub gender: Gender,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
}

impl ProductView {
    /// Variants of one colour, in store order.
    pub fn variants_of_color<'a>(
        &'a self,
        color: &'a str,
    ) -> impl Iterator<Item = &'a VariantView> + 'a {
        self.variants
            .iter()
            .flatten()
            .filter(move |v| v.color == color)
    }
}
