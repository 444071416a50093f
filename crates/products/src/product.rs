//! Product mapping.

use serde_json::{Map, Value};

use storefront_catalog::{Collection, OneOrMany, ProductsResponse};
use storefront_core::{Entity, RecordId};

use crate::files::FileUrlResolver;
use crate::gender::gender_from_categories;
use crate::mapper::{collection_key, RecordMapper};
use crate::media::reconcile_color_media;
use crate::stock::StockStatus;
use crate::view::{CategoryView, ProductView, PRICE_PLACEHOLDER};

impl<F: FileUrlResolver> RecordMapper<F> {
    /// Map a product record (with any expanded variants) to its view.
    ///
    /// `categories` are the product's already-resolved categories; gender is
    /// derived from them alone. Never fails: every missing field falls back
    /// to a default.
    pub fn map_product_to_view(
        &self,
        record: &ProductsResponse,
        categories: Option<&[CategoryView]>,
    ) -> ProductView {
        let collection_id = collection_key(record.collection_id(), Collection::Products.as_str());
        let record_id = record.id().as_str();
        let p = &record.record;

        let main_image = p
            .main_image
            .as_ref()
            .filter(|f| !f.is_empty())
            .map(|f| self.file_url(collection_id, record_id, f.as_str()));

        let expanded_variants = record.expand.as_ref().and_then(|e| e.variants.as_deref());
        let variants = reconcile_color_media(self.map_variants_from_expand(expanded_variants));
        let has_variants = !variants.is_empty();

        let image = main_image
            .or_else(|| {
                variants.first().and_then(|v| {
                    v.image
                        .clone()
                        .or_else(|| v.gallery_images.first().cloned())
                })
            })
            .unwrap_or_default();
        let images = if image.is_empty() {
            Vec::new()
        } else {
            vec![image.clone()]
        };

        let total_stock = variants
            .iter()
            .fold(0i64, |sum, v| sum.saturating_add(v.stock_quantity));
        let stock_status = if has_variants {
            self.stock_status(total_stock)
        } else {
            StockStatus::OutOfStock
        };

        let gender = gender_from_categories(categories);

        tracing::debug!(
            product_id = record_id,
            variants = variants.len(),
            total_stock,
            stock_status = %stock_status,
            gender = %gender,
            "mapped product"
        );

        ProductView {
            id: if p.slug.is_empty() {
                record_id.to_string()
            } else {
                p.slug.clone()
            },
            collection_id: collection_id.to_string(),
            collection_name: record.collection_name(),

            title: p.title.clone(),
            slug: p.slug.clone(),
            description: p.description.clone().unwrap_or_default(),

            price: PRICE_PLACEHOLDER.to_string(),
            price_value: 0.0,
            image,
            images,

            variants: has_variants.then_some(variants),
            categories: categories.map(<[CategoryView]>::to_vec),
            category_ids: category_ids(p.category.as_ref()),

            attributes: attributes_map(p.attributes.as_ref()),

            is_feature: p.is_featured.unwrap_or(false),
            has_variants,
            stock_status,
            gender,

            stripe_price_id: p.stripe_price_id.clone(),
        }
    }

    /// Map a product using the categories expanded on the record itself.
    ///
    /// When the record carries no category expansion the view has no
    /// resolved categories (and so is unisex).
    pub fn map_product(&self, record: &ProductsResponse) -> ProductView {
        let expanded = record.expand.as_ref().and_then(|e| e.category.as_ref());
        match expanded {
            Some(raw) => {
                let categories = self.map_categories_from_expand(Some(raw));
                self.map_product_to_view(record, Some(categories.as_slice()))
            }
            None => self.map_product_to_view(record, None),
        }
    }
}

/// A single id becomes a one-element list (an empty id none); a list is kept
/// as stored.
fn category_ids(raw: Option<&OneOrMany<RecordId>>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(OneOrMany::One(id)) if id.is_empty() => Vec::new(),
        Some(ids) => ids.iter().map(RecordId::to_string).collect(),
    }
}

fn attributes_map(raw: Option<&Value>) -> Map<String, Value> {
    match raw {
        Some(Value::Object(map)) => map.clone(),
        Some(other) => {
            tracing::debug!(kind = json_kind(other), "ignoring non-object product attributes");
            Map::new()
        }
        None => Map::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use proptest::prelude::*;

    use super::*;
    use crate::gender::Gender;
    use crate::mapper::test_support::{category, mapper, product};

    fn with_variants(variants: serde_json::Value) -> ProductsResponse {
        product(json!({ "expand": { "product_variants(product)": variants } }))
    }

    fn raw_variant(
        id: &str,
        color: &str,
        gallery: &[&str],
        stock: serde_json::Value,
    ) -> serde_json::Value {
        json!({
            "id": id,
            "collectionId": "pbc_var",
            "collectionName": "product_variants",
            "product": "p1",
            "color": color,
            "size": "M",
            "sku": format!("SKU-{id}"),
            "stock_quantity": stock,
            "gallery_images": gallery,
        })
    }

    #[test]
    fn bare_product_is_out_of_stock_without_images() {
        let view = mapper().map_product_to_view(&product(json!({})), None);
        assert_eq!(view.image, "");
        assert!(view.images.is_empty());
        assert_eq!(view.stock_status, StockStatus::OutOfStock);
        assert!(!view.has_variants);
        assert_eq!(view.variants, None);
        assert_eq!(view.categories, None);
        assert!(view.category_ids.is_empty());
        assert!(view.attributes.is_empty());
        assert_eq!(view.gender, Gender::Unisex);
    }

    #[test]
    fn identity_and_pricing_placeholders() {
        let record = product(json!({"stripe_price_id": "price_1"}));
        let view = mapper().map_product_to_view(&record, None);
        assert_eq!(view.id, "classic-tee");
        assert_eq!(view.price, "Loading...");
        assert_eq!(view.price_value, 0.0);
        assert_eq!(view.stripe_price_id.as_deref(), Some("price_1"));
        assert_eq!(view.description, "<p>Soft cotton.</p>");
        assert_eq!(view.collection_name, Collection::Products);

        let view = mapper().map_product_to_view(&product(json!({"slug": ""})), None);
        assert_eq!(view.id, "p1");
    }

    #[test]
    fn main_image_resolves_against_product() {
        let view = mapper().map_product_to_view(&product(json!({"main_image": "tee.jpg"})), None);
        assert_eq!(view.image, "https://files.test/pbc_prod/p1/tee.jpg");
        assert_eq!(view.images, vec![view.image.clone()]);
    }

    #[test]
    fn missing_collection_id_falls_back_to_products() {
        let view = mapper().map_product_to_view(
            &product(json!({"collectionId": "", "main_image": "tee.jpg"})),
            None,
        );
        assert_eq!(view.collection_id, "products");
        assert_eq!(view.image, "https://files.test/products/p1/tee.jpg");
    }

    #[test]
    fn image_falls_back_to_first_variant() {
        let record = with_variants(json!([
            raw_variant("v1", "red", &[], json!(1)),
            raw_variant("v2", "red", &["r.jpg"], json!(1)),
        ]));
        let view = mapper().map_product_to_view(&record, None);
        // v1 inherits the red gallery, so its image is the shared one.
        assert_eq!(view.image, "https://files.test/pbc_var/v2/r.jpg");
        assert_eq!(view.images.len(), 1);
    }

    #[test]
    fn color_group_media_is_shared() {
        let record = with_variants(json!([
            raw_variant("v1", "red", &["a.jpg", "b.jpg"], json!(2)),
            raw_variant("v2", "red", &[], json!(0)),
        ]));
        let view = mapper().map_product_to_view(&record, None);
        let variants = view.variants.unwrap();
        let expected = vec![
            "https://files.test/pbc_var/v1/a.jpg".to_string(),
            "https://files.test/pbc_var/v1/b.jpg".to_string(),
        ];
        for v in &variants {
            assert_eq!(v.gallery_images, expected);
            assert_eq!(v.image.as_deref(), Some(expected[0].as_str()));
        }
    }

    #[test]
    fn stock_is_summed_with_garbage_as_zero() {
        let record = with_variants(json!([
            raw_variant("v1", "red", &[], json!(4)),
            raw_variant("v2", "red", &[], json!("x")),
            raw_variant("v3", "blue", &[], json!("3")),
        ]));
        let view = mapper().map_product_to_view(&record, None);
        assert!(view.has_variants);
        assert_eq!(view.stock_status, StockStatus::InStock);

        let record = with_variants(json!([raw_variant("v1", "red", &[], json!(null))]));
        let view = mapper().map_product_to_view(&record, None);
        assert_eq!(view.stock_status, StockStatus::OutOfStock);
    }

    #[test]
    fn category_ids_normalize() {
        let m = mapper();
        let one = m.map_product_to_view(&product(json!({"category": "cat1"})), None);
        assert_eq!(one.category_ids, vec!["cat1"]);

        let many = m.map_product_to_view(&product(json!({"category": ["a", "b"]})), None);
        assert_eq!(many.category_ids, vec!["a", "b"]);

        let empty = m.map_product_to_view(&product(json!({"category": ""})), None);
        assert!(empty.category_ids.is_empty());
    }

    #[test]
    fn gender_comes_from_supplied_categories_only() {
        let m = mapper();
        let cats = vec![
            m.map_record_to_category(&category("c1", "Mens", "mens")),
            m.map_record_to_category(&category("c2", "Women", "women")),
        ];
        let view = m.map_product_to_view(&product(json!({})), Some(cats.as_slice()));
        assert_eq!(view.gender, Gender::Mens);
        assert_eq!(view.categories.as_deref(), Some(cats.as_slice()));

        let womens = vec![m.map_record_to_category(&category("c3", "Womens", "womens"))];
        let view = m.map_product_to_view(&product(json!({})), Some(womens.as_slice()));
        assert_eq!(view.gender, Gender::Womens);

        let view = m.map_product_to_view(&product(json!({})), Some(&[][..]));
        assert_eq!(view.gender, Gender::Unisex);
    }

    #[test]
    fn attributes_only_accept_objects() {
        let m = mapper();
        let view = m.map_product_to_view(&product(json!({"attributes": {"fit": "slim"}})), None);
        assert_eq!(view.attributes.get("fit"), Some(&json!("slim")));

        let view = m.map_product_to_view(&product(json!({"attributes": [1, 2]})), None);
        assert!(view.attributes.is_empty());
    }

    #[test]
    fn map_product_uses_expanded_categories() {
        let record = product(json!({
            "category": ["c1"],
            "expand": {
                "category": [{
                    "id": "c1",
                    "collectionId": "pbc_cat",
                    "collectionName": "categories",
                    "name": "Womens",
                    "slug": "womens",
                }]
            }
        }));
        let view = mapper().map_product(&record);
        assert_eq!(view.gender, Gender::Womens);
        assert_eq!(view.categories.map(|c| c.len()), Some(1));

        let view = mapper().map_product(&product(json!({})));
        assert_eq!(view.categories, None);
    }

    #[test]
    fn mapping_is_idempotent() {
        let record = with_variants(json!([
            raw_variant("v1", "red", &["a.jpg"], json!(2)),
            raw_variant("v2", "blue", &[], json!(9)),
        ]));
        let m = mapper();
        assert_eq!(m.map_product_to_view(&record, None), m.map_product_to_view(&record, None));
    }

    proptest! {
        /// Property: product stock status is the policy applied to the summed variant stock.
        #[test]
        fn stock_status_follows_total(quantities in proptest::collection::vec(-5i64..20, 1..6)) {
            let variants: Vec<_> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| raw_variant(&format!("v{i}"), "red", &[], json!(q)))
                .collect();
            let m = mapper();
            let view = m.map_product_to_view(&with_variants(json!(variants)), None);
            let total: i64 = quantities.iter().sum();
            prop_assert_eq!(view.stock_status, m.stock_policy().status_for(total));
        }
    }
}
