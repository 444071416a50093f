//! Typed relation-expansion payloads.
//!
//! The store returns expanded relations inline under `expand`, keyed by the
//! relation field name, or by `collection(field)` for back-relations.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::records::{CategoriesResponse, ProductVariantsResponse};
use crate::serde_helpers::OneOrMany;

/// Expand key of the variants pointing back at a product.
pub const PRODUCT_VARIANTS_RELATION: &str = "product_variants(product)";

/// Expand key for a back-relation: records of `collection` whose `field`
/// references the parent.
pub fn back_relation(collection: Collection, field: &str) -> String {
    format!("{}({})", collection.as_str(), field)
}

/// Relations a product may be fetched with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductExpand {
    #[serde(
        rename = "product_variants(product)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub variants: Option<Vec<ProductVariantsResponse>>,
    /// Expanded category relation; a single record on legacy rows, a list
    /// (possibly holding nulls for dangling ids) otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<OneOrMany<Option<CategoriesResponse>>>,
}
