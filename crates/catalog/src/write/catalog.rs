//! Catalog payloads: categories, collection images, products, product variants.

use serde::Serialize;
use serde_json::Value;

use storefront_core::RecordId;

use super::{many, single, FileUpload, Writable, WritePayload};
use crate::options::CollectionImagesPosition;
use crate::records::{
    CategoriesRecord, CollectionImagesRecord, ProductVariantsRecord, ProductsRecord,
};

// -------------------------
// categories
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoriesCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoriesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl WritePayload for CategoriesCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl WritePayload for CategoriesUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl Writable for CategoriesRecord {
    type Create = CategoriesCreate;
    type Update = CategoriesUpdate;
}

// -------------------------
// collection_images
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionImagesCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub position: CollectionImagesPosition,
    pub title: String,
}

impl CollectionImagesCreate {
    pub fn new(title: impl Into<String>, position: CollectionImagesPosition) -> Self {
        Self {
            id: None,
            active: None,
            image: None,
            label: None,
            link: None,
            position,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CollectionImagesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<CollectionImagesPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl WritePayload for CollectionImagesCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl WritePayload for CollectionImagesUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl Writable for CollectionImagesRecord {
    type Create = CollectionImagesCreate;
    type Update = CollectionImagesUpdate;
}

// -------------------------
// products
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip)]
    pub main_image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_product_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<RecordId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip)]
    pub main_image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_product_id: Option<String>,
}

impl WritePayload for ProductsCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("main_image", &self.main_image)
    }
}

impl WritePayload for ProductsUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("main_image", &self.main_image)
    }
}

impl Writable for ProductsRecord {
    type Create = ProductsCreate;
    type Update = ProductsUpdate;
}

// -------------------------
// product_variants
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductVariantsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub product: RecordId,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_swatch: Option<String>,
    pub size: String,
    pub sku: String,
    pub stock_quantity: i64,
    #[serde(skip)]
    pub gallery_images: Vec<FileUpload>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductVariantsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_swatch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip)]
    pub gallery_images: Vec<FileUpload>,
}

impl WritePayload for ProductVariantsCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        many("gallery_images", &self.gallery_images)
    }
}

impl WritePayload for ProductVariantsUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        many("gallery_images", &self.gallery_images)
    }
}

impl Writable for ProductVariantsRecord {
    type Create = ProductVariantsCreate;
    type Update = ProductVariantsUpdate;
}
