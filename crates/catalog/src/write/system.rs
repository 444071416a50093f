//! Payloads for the store's built-in collections. Keys are camelCase, as the
//! store names them; `created`/`updated` are stamped by the store.

use serde::Serialize;

use storefront_core::RecordId;

use super::Writable;
use crate::records::{
    AuthOriginsRecord, ExternalAuthsRecord, MfasRecord, OtpsRecord, SuperusersRecord,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOriginsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub collection_ref: String,
    pub fingerprint: String,
    pub record_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOriginsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_ref: Option<String>,
}

impl Writable for AuthOriginsRecord {
    type Create = AuthOriginsCreate;
    type Update = AuthOriginsUpdate;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAuthsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub collection_ref: String,
    pub provider: String,
    pub provider_id: String,
    pub record_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAuthsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_ref: Option<String>,
}

impl Writable for ExternalAuthsRecord {
    type Create = ExternalAuthsCreate;
    type Update = ExternalAuthsUpdate;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfasCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub collection_ref: String,
    pub method: String,
    pub record_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfasUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_ref: Option<String>,
}

impl Writable for MfasRecord {
    type Create = MfasCreate;
    type Update = MfasUpdate;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpsCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub collection_ref: String,
    pub password: String,
    pub record_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to: Option<String>,
}

impl Writable for OtpsRecord {
    type Create = OtpsCreate;
    type Update = OtpsUpdate;
}

/// Auth collection: credential fields on top of the superuser record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperusersCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_visibility: Option<bool>,
    pub password: String,
    pub password_confirm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperusersUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_visibility: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
}

impl Writable for SuperusersRecord {
    type Create = SuperusersCreate;
    type Update = SuperusersUpdate;
}

without_files!(
    AuthOriginsCreate,
    AuthOriginsUpdate,
    ExternalAuthsCreate,
    ExternalAuthsUpdate,
    MfasCreate,
    MfasUpdate,
    OtpsCreate,
    OtpsUpdate,
    SuperusersCreate,
    SuperusersUpdate,
);
