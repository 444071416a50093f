//! Collection names known to the record store.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::SchemaError;

/// Every collection defined in the store schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "_authOrigins")]
    AuthOrigins,
    #[serde(rename = "_externalAuths")]
    ExternalAuths,
    #[serde(rename = "_mfas")]
    Mfas,
    #[serde(rename = "_otps")]
    Otps,
    #[serde(rename = "_superusers")]
    Superusers,
    #[serde(rename = "categories")]
    Categories,
    #[serde(rename = "collection_images")]
    CollectionImages,
    #[serde(rename = "coupons")]
    Coupons,
    #[serde(rename = "global_settings")]
    GlobalSettings,
    #[serde(rename = "navigation")]
    Navigation,
    #[serde(rename = "order_items")]
    OrderItems,
    #[serde(rename = "orders")]
    Orders,
    #[serde(rename = "pages")]
    Pages,
    #[serde(rename = "product_variants")]
    ProductVariants,
    #[serde(rename = "products")]
    Products,
    #[serde(rename = "ui_assets")]
    UiAssets,
    #[serde(rename = "ui_sections")]
    UiSections,
    #[serde(rename = "user_addresses")]
    UserAddresses,
    #[serde(rename = "user_lists")]
    UserLists,
    #[serde(rename = "users")]
    Users,
}

impl Collection {
    pub const ALL: [Collection; 20] = [
        Collection::AuthOrigins,
        Collection::ExternalAuths,
        Collection::Mfas,
        Collection::Otps,
        Collection::Superusers,
        Collection::Categories,
        Collection::CollectionImages,
        Collection::Coupons,
        Collection::GlobalSettings,
        Collection::Navigation,
        Collection::OrderItems,
        Collection::Orders,
        Collection::Pages,
        Collection::ProductVariants,
        Collection::Products,
        Collection::UiAssets,
        Collection::UiSections,
        Collection::UserAddresses,
        Collection::UserLists,
        Collection::Users,
    ];

    /// Name used in URLs, relation keys and `collectionName`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::AuthOrigins => "_authOrigins",
            Collection::ExternalAuths => "_externalAuths",
            Collection::Mfas => "_mfas",
            Collection::Otps => "_otps",
            Collection::Superusers => "_superusers",
            Collection::Categories => "categories",
            Collection::CollectionImages => "collection_images",
            Collection::Coupons => "coupons",
            Collection::GlobalSettings => "global_settings",
            Collection::Navigation => "navigation",
            Collection::OrderItems => "order_items",
            Collection::Orders => "orders",
            Collection::Pages => "pages",
            Collection::ProductVariants => "product_variants",
            Collection::Products => "products",
            Collection::UiAssets => "ui_assets",
            Collection::UiSections => "ui_sections",
            Collection::UserAddresses => "user_addresses",
            Collection::UserLists => "user_lists",
            Collection::Users => "users",
        }
    }

    /// Auth collections carry email/password system fields.
    pub fn is_auth(&self) -> bool {
        matches!(self, Collection::Superusers | Collection::Users)
    }

    /// Built-in collections managed by the store itself.
    pub fn is_system(&self) -> bool {
        self.as_str().starts_with('_')
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SchemaError::unknown_collection(s))
    }
}

/// Ties a record shape to the collection it is stored in.
pub trait CollectionRecord {
    const COLLECTION: Collection;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for c in Collection::ALL {
            assert_eq!(c.as_str().parse::<Collection>().unwrap(), c);
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "sessions".parse::<Collection>().unwrap_err();
        assert_eq!(err, SchemaError::UnknownCollection("sessions".to_string()));
    }

    #[test]
    fn auth_and_system_classification() {
        assert!(Collection::Users.is_auth());
        assert!(Collection::Superusers.is_auth());
        assert!(!Collection::Products.is_auth());

        assert!(Collection::Mfas.is_system());
        assert!(!Collection::Users.is_system());
        assert_eq!(Collection::ALL.iter().filter(|c| c.is_system()).count(), 5);
    }
}
