//! Site content payloads: settings, navigation, pages, UI assets and page
//! sections.

use serde::Serialize;
use serde_json::Value;

use storefront_core::{IsoDate, RecordId};

use super::{many, single, FileUpload, Writable, WritePayload};
use crate::options::{NavigationLocation, UiAssetsGroup, UiSectionType};
use crate::records::{
    GlobalSettingsRecord, NavigationRecord, PagesRecord, UiAssetsRecord, UiSectionsRecord,
};

// -------------------------
// global_settings
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GlobalSettingsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub currency_code: String,
    pub currency_symbol: String,
    #[serde(skip)]
    pub icon: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_threshold: Option<f64>,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GlobalSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(skip)]
    pub icon: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl WritePayload for GlobalSettingsCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("icon", &self.icon)
    }
}

impl WritePayload for GlobalSettingsUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("icon", &self.icon)
    }
}

impl Writable for GlobalSettingsRecord {
    type Create = GlobalSettingsCreate;
    type Update = GlobalSettingsUpdate;
}

// -------------------------
// navigation
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavigationCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<NavigationLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordId>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavigationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<NavigationLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Writable for NavigationRecord {
    type Create = NavigationCreate;
    type Update = NavigationUpdate;
}

// -------------------------
// pages
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PagesCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip)]
    pub hero_image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip)]
    pub og_image: Option<FileUpload>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PagesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip)]
    pub hero_image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip)]
    pub og_image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl WritePayload for PagesCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        [
            single("hero_image", &self.hero_image),
            single("og_image", &self.og_image),
        ]
        .concat()
    }
}

impl WritePayload for PagesUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        [
            single("hero_image", &self.hero_image),
            single("og_image", &self.og_image),
        ]
        .concat()
    }
}

impl Writable for PagesRecord {
    type Create = PagesCreate;
    type Update = PagesUpdate;
}

// -------------------------
// ui_assets
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UiAssetsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<UiAssetsGroup>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UiAssetsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<UiAssetsGroup>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl WritePayload for UiAssetsCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl WritePayload for UiAssetsUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        single("image", &self.image)
    }
}

impl Writable for UiAssetsRecord {
    type Create = UiAssetsCreate;
    type Update = UiAssetsUpdate;
}

// -------------------------
// ui_sections
// -------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UiSectionsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip)]
    pub image: Vec<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<UiSectionType>,
    #[serde(skip)]
    pub video: Option<FileUpload>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UiSectionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip)]
    pub image: Vec<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start: Option<IsoDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<UiSectionType>,
    #[serde(skip)]
    pub video: Option<FileUpload>,
}

impl WritePayload for UiSectionsCreate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        [many("image", &self.image), single("video", &self.video)].concat()
    }
}

impl WritePayload for UiSectionsUpdate {
    fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        [many("image", &self.image), single("video", &self.video)].concat()
    }
}

impl Writable for UiSectionsRecord {
    type Create = UiSectionsCreate;
    type Update = UiSectionsUpdate;
}

without_files!(NavigationCreate, NavigationUpdate);
