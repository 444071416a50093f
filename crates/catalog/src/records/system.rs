//! Built-in collections managed by the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::IsoDate;

use crate::collection::{Collection, CollectionRecord};
use crate::response::{AuthSystemFields, Response};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthOriginsRecord {
    pub collection_ref: String,
    pub created: IsoDate,
    pub fingerprint: String,
    pub record_ref: String,
    pub updated: IsoDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalAuthsRecord {
    pub collection_ref: String,
    pub created: IsoDate,
    pub provider: String,
    pub provider_id: String,
    pub record_ref: String,
    pub updated: IsoDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MfasRecord {
    pub collection_ref: String,
    pub created: IsoDate,
    pub method: String,
    pub record_ref: String,
    pub updated: IsoDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtpsRecord {
    pub collection_ref: String,
    pub created: IsoDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub record_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to: Option<String>,
    pub updated: IsoDate,
}

/// Superuser fields beyond the auth system fields. Password material is
/// hidden by the store and only present on privileged reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuperusersRecord {
    pub created: IsoDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_key: Option<String>,
    pub updated: IsoDate,
}

impl CollectionRecord for AuthOriginsRecord {
    const COLLECTION: Collection = Collection::AuthOrigins;
}

impl CollectionRecord for ExternalAuthsRecord {
    const COLLECTION: Collection = Collection::ExternalAuths;
}

impl CollectionRecord for MfasRecord {
    const COLLECTION: Collection = Collection::Mfas;
}

impl CollectionRecord for OtpsRecord {
    const COLLECTION: Collection = Collection::Otps;
}

impl CollectionRecord for SuperusersRecord {
    const COLLECTION: Collection = Collection::Superusers;
}

pub type AuthOriginsResponse<X = Value> = Response<AuthOriginsRecord, X>;
pub type ExternalAuthsResponse<X = Value> = Response<ExternalAuthsRecord, X>;
pub type MfasResponse<X = Value> = Response<MfasRecord, X>;
pub type OtpsResponse<X = Value> = Response<OtpsRecord, X>;
pub type SuperusersResponse<X = Value> = Response<SuperusersRecord, X, AuthSystemFields>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_core::Entity;

    #[test]
    fn superuser_response_hides_absent_secrets() {
        let raw = json!({
            "id": "su1",
            "collectionId": "pbc_3142635823",
            "collectionName": "_superusers",
            "email": "root@example.com",
            "emailVisibility": false,
            "verified": true,
            "created": "2024-01-01 00:00:00.000Z",
            "updated": "2024-01-02 00:00:00.000Z",
        });
        let su: SuperusersResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(su.id().as_str(), "su1");
        assert_eq!(su.system.username, "");
        assert!(su.record.password.is_none());
        assert!(su.record.updated.parse().unwrap() > su.record.created.parse().unwrap());

        let out = serde_json::to_value(&su).unwrap();
        assert!(out.get("password").is_none());
        assert!(out.get("tokenKey").is_none());
    }

    #[test]
    fn otp_uses_camel_case_keys() {
        let raw = json!({
            "id": "o1",
            "collectionId": "pbc_1",
            "collectionName": "_otps",
            "collectionRef": "_pb_users_auth_",
            "recordRef": "u1",
            "sentTo": "a@example.com",
        });
        let otp: OtpsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(otp.record.record_ref, "u1");
        assert_eq!(otp.record.sent_to.as_deref(), Some("a@example.com"));
        assert!(otp.record.created.is_empty());
    }
}
