//! Category mapping.
//!
//! All entry points share one rule: title and name mirror the stored name,
//! the image is a resolved URL only when a file is stored, and visibility and
//! sort order default to `false`/`0`.

use storefront_catalog::{CategoriesResponse, Collection, OneOrMany};
use storefront_core::Entity;

use crate::files::FileUrlResolver;
use crate::mapper::RecordMapper;
use crate::view::CategoryView;

impl<F: FileUrlResolver> RecordMapper<F> {
    pub fn map_record_to_category<X>(&self, record: &CategoriesResponse<X>) -> CategoryView {
        let id = record.id().as_str();
        let c = &record.record;

        let image = c
            .image
            .as_ref()
            .filter(|f| !f.is_empty())
            .map(|f| self.file_url(Collection::Categories.as_str(), id, f.as_str()));

        CategoryView {
            id: id.to_string(),
            collection_id: record.collection_id().to_string(),
            collection_name: record.collection_name(),
            title: c.name.clone(),
            name: c.name.clone(),
            slug: c.slug.clone(),
            image,
            is_visible: c.is_visible.unwrap_or(false),
            sort_order: c.sort_order.unwrap_or(0),
        }
    }

    /// Single expanded relation; absent stays absent.
    pub fn map_category_from_expand<X>(
        &self,
        expanded: Option<&CategoriesResponse<X>>,
    ) -> Option<CategoryView> {
        expanded.map(|c| self.map_record_to_category(c))
    }

    /// Expanded relation holding one record or a list; null entries are
    /// dropped and order is preserved.
    pub fn map_categories_from_expand<X>(
        &self,
        expanded: Option<&OneOrMany<Option<CategoriesResponse<X>>>>,
    ) -> Vec<CategoryView> {
        let Some(expanded) = expanded else {
            return Vec::new();
        };
        expanded
            .iter()
            .flatten()
            .map(|c| self.map_record_to_category(c))
            .collect()
    }
}
