//! Catalog collections: categories, products, product variants and the
//! collection banner images.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{FileName, RecordId};

use crate::collection::{Collection, CollectionRecord};
use crate::expand::ProductExpand;
use crate::options::CollectionImagesPosition;
use crate::response::Response;
use crate::serde_helpers::{
    empty_as_none, lenient_bool_opt, lenient_int_opt, lenient_quantity, OneOrMany,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<FileName>,
    #[serde(deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    pub name: String,
    pub slug: String,
    #[serde(deserialize_with = "lenient_int_opt", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionImagesRecord {
    #[serde(
        default,
        deserialize_with = "lenient_bool_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<FileName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub position: CollectionImagesPosition,
    #[serde(default)]
    pub title: String,
}

/// One purchasable size/colour combination of a product.
///
/// `stock_quantity` is coerced on read: non-numeric or missing values are `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductVariantsRecord {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_swatch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<FileName>>,
    pub product: RecordId,
    pub size: String,
    pub sku: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub stock_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsRecord {
    /// Free-form JSON bag; only objects are surfaced to views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    /// Category relation: a single id on legacy rows, a list otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<OneOrMany<RecordId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub main_image: Option<FileName>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_product_id: Option<String>,
    pub title: String,
}

impl CollectionRecord for CategoriesRecord {
    const COLLECTION: Collection = Collection::Categories;
}

impl CollectionRecord for CollectionImagesRecord {
    const COLLECTION: Collection = Collection::CollectionImages;
}

impl CollectionRecord for ProductVariantsRecord {
    const COLLECTION: Collection = Collection::ProductVariants;
}

impl CollectionRecord for ProductsRecord {
    const COLLECTION: Collection = Collection::Products;
}

pub type CategoriesResponse<X = Value> = Response<CategoriesRecord, X>;
pub type CollectionImagesResponse<X = Value> = Response<CollectionImagesRecord, X>;
pub type ProductVariantsResponse<X = Value> = Response<ProductVariantsRecord, X>;
pub type ProductsResponse<X = ProductExpand> = Response<ProductsRecord, X>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_with_empty_image_has_no_file() {
        let raw = json!({
            "id": "c1",
            "collectionId": "pbc_cat",
            "collectionName": "categories",
            "name": "Mens",
            "slug": "mens",
            "image": "",
            "is_visible": true,
            "sort_order": 2,
            "description": "",
        });
        let cat: CategoriesResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(cat.record.image, None);
        assert_eq!(cat.record.sort_order, Some(2));
        assert_eq!(cat.record.is_visible, Some(true));
    }

    #[test]
    fn variant_stock_quantity_is_coerced() {
        let raw = json!({
            "id": "v1",
            "collectionId": "pbc_var",
            "collectionName": "product_variants",
            "product": "p1",
            "color": "red",
            "size": "M",
            "sku": "TEE-RED-M",
            "stock_quantity": "n/a",
        });
        let v: ProductVariantsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(v.record.stock_quantity, 0);
        assert_eq!(v.record.gallery_images, None);
    }

    #[test]
    fn product_category_accepts_single_id() {
        let raw = json!({
            "id": "p1",
            "collectionId": "pbc_prod",
            "collectionName": "products",
            "title": "Tee",
            "slug": "tee",
            "category": "cat1",
            "main_image": "",
        });
        let p: ProductsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(p.record.category, Some(OneOrMany::One(RecordId::new("cat1"))));
        assert_eq!(p.record.main_image, None);
        assert!(p.expand.is_none());
    }

    #[test]
    fn collection_image_requires_known_position() {
        let base = json!({
            "id": "ci1",
            "collectionId": "pbc_ci",
            "collectionName": "collection_images",
            "title": "Summer",
            "position": "left",
        });
        let img: CollectionImagesResponse = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(img.record.position, CollectionImagesPosition::Left);

        let mut bad = base;
        bad["position"] = json!("center");
        assert!(serde_json::from_value::<CollectionImagesResponse>(bad).is_err());
    }

    #[test]
    fn numeric_flags_in_expanded_categories_decode() {
        let raw = json!({
            "id": "p1",
            "collectionId": "pbc_prod",
            "collectionName": "products",
            "title": "Tee",
            "slug": "tee",
            "is_featured": 1,
            "expand": {
                "category": [{
                    "id": "c1",
                    "collectionId": "pbc_cat",
                    "collectionName": "categories",
                    "name": "Mens",
                    "slug": "mens",
                    "is_visible": 1,
                }]
            }
        });
        let p: ProductsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(p.record.is_featured, Some(true));
        let categories = p.expand.unwrap().category.unwrap().into_vec();
        let cat = categories[0].as_ref().unwrap();
        assert_eq!(cat.record.is_visible, Some(true));
    }
}
