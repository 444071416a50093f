//! Variant mapping.

use storefront_catalog::{Collection, ProductVariantsResponse};
use storefront_core::Entity;

use crate::files::FileUrlResolver;
use crate::mapper::{collection_key, RecordMapper};
use crate::view::VariantView;

impl<F: FileUrlResolver> RecordMapper<F> {
    /// Map expanded variant records, preserving order. `None` maps to an
    /// empty list.
    pub fn map_variants_from_expand(
        &self,
        records: Option<&[ProductVariantsResponse]>,
    ) -> Vec<VariantView> {
        let Some(records) = records else {
            return Vec::new();
        };
        records.iter().map(|r| self.map_variant(r)).collect()
    }

    /// Gallery files resolve against the variant's own collection and id;
    /// the primary image is the first gallery URL.
    pub fn map_variant(&self, record: &ProductVariantsResponse) -> VariantView {
        let collection = collection_key(
            record.collection_id(),
            Collection::ProductVariants.as_str(),
        );
        let record_id = record.id().as_str();
        let v = &record.record;

        let gallery_images: Vec<String> = v
            .gallery_images
            .iter()
            .flatten()
            .filter(|f| !f.is_empty())
            .map(|f| self.file_url(collection, record_id, f.as_str()))
            .collect();
        let image = gallery_images.first().cloned();

        tracing::trace!(
            variant_id = record_id,
            color = %v.color,
            gallery = gallery_images.len(),
            "mapped variant"
        );

        VariantView {
            id: record_id.to_string(),
            collection_id: record.collection_id().to_string(),
            collection_name: record.collection_name(),
            product: v.product.to_string(),
            color: v.color.clone(),
            color_swatch: v.color_swatch.clone().filter(|s| !s.is_empty()),
            size: v.size.clone(),
            sku: v.sku.clone(),
            gallery_images,
            image,
            stock_quantity: v.stock_quantity,
            stock_status: self.stock_status(v.stock_quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::mapper::test_support::{mapper, variant};
    use crate::stock::StockStatus;

    #[test]
    fn none_maps_to_empty_list() {
        assert!(mapper().map_variants_from_expand(None).is_empty());
        assert!(mapper().map_variants_from_expand(Some(&[][..])).is_empty());
    }

    #[test]
    fn resolves_gallery_against_variant_identity() {
        let records = vec![variant("v1", "red", &["front.jpg", "back.jpg"], 3)];
        let views = mapper().map_variants_from_expand(Some(records.as_slice()));

        assert_eq!(views.len(), 1);
        let v = &views[0];
        assert_eq!(
            v.gallery_images,
            vec![
                "https://files.test/pbc_var/v1/front.jpg",
                "https://files.test/pbc_var/v1/back.jpg"
            ]
        );
        assert_eq!(v.image.as_deref(), Some("https://files.test/pbc_var/v1/front.jpg"));
        assert_eq!(v.stock_status, StockStatus::LowStock);
        assert_eq!(v.product, "p1");
        assert_eq!(v.sku, "SKU-v1");
    }

    #[test]
    fn empty_gallery_has_no_image() {
        let records = vec![variant("v2", "blue", &[], 0)];
        let views = mapper().map_variants_from_expand(Some(records.as_slice()));
        let v = &views[0];
        assert!(v.gallery_images.is_empty());
        assert_eq!(v.image, None);
        assert_eq!(v.stock_status, StockStatus::OutOfStock);
        assert_eq!(v.color_swatch, None);
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![
            variant("v3", "green", &[], 10),
            variant("v1", "red", &[], 1),
            variant("v2", "blue", &[], 0),
        ];
        let ids: Vec<_> = mapper()
            .map_variants_from_expand(Some(records.as_slice()))
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["v3", "v1", "v2"]);
    }
}
