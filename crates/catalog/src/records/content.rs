//! Site content collections: settings, navigation, pages, UI assets and
//! page sections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{FileName, IsoDate, RecordId};

use crate::collection::{Collection, CollectionRecord};
use crate::options::{NavigationLocation, UiAssetsGroup, UiSectionType};
use crate::response::Response;
use crate::serde_helpers::{empty_as_none, lenient_bool_opt, lenient_int_opt};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettingsRecord {
    pub currency_code: String,
    pub currency_symbol: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub icon: Option<FileName>,
    #[serde(deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_threshold: Option<f64>,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationRecord {
    #[serde(deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    pub label: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub location: Option<NavigationLocation>,
    #[serde(deserialize_with = "lenient_int_opt", skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordId>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesRecord {
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<FileName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub og_image: Option<FileName>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiAssetsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub group: Option<UiAssetsGroup>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<FileName>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSectionsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<FileName>>,
    #[serde(deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub page: Option<RecordId>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub schedule_end: Option<IsoDate>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub schedule_start: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(deserialize_with = "lenient_int_opt", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(
        rename = "type",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<UiSectionType>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub video: Option<FileName>,
}

impl CollectionRecord for GlobalSettingsRecord {
    const COLLECTION: Collection = Collection::GlobalSettings;
}

impl CollectionRecord for NavigationRecord {
    const COLLECTION: Collection = Collection::Navigation;
}

impl CollectionRecord for PagesRecord {
    const COLLECTION: Collection = Collection::Pages;
}

impl CollectionRecord for UiAssetsRecord {
    const COLLECTION: Collection = Collection::UiAssets;
}

impl CollectionRecord for UiSectionsRecord {
    const COLLECTION: Collection = Collection::UiSections;
}

pub type GlobalSettingsResponse<X = Value> = Response<GlobalSettingsRecord, X>;
pub type NavigationResponse<X = Value> = Response<NavigationRecord, X>;
pub type PagesResponse<X = Value> = Response<PagesRecord, X>;
pub type UiAssetsResponse<X = Value> = Response<UiAssetsRecord, X>;
pub type UiSectionsResponse<X = Value> = Response<UiSectionsRecord, X>;
