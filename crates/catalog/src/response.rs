//! System fields and the response envelope every record is returned in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{Entity, RecordId};

use crate::collection::Collection;

/// Fields the store adds to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSystemFields {
    pub id: RecordId,
    #[serde(default)]
    pub collection_id: String,
    pub collection_name: Collection,
}

impl BaseSystemFields {
    /// System fields for a record of `collection`; the collection id defaults
    /// to the collection name, as for collections imported by name.
    pub fn new(id: impl Into<RecordId>, collection: Collection) -> Self {
        Self {
            id: id.into(),
            collection_id: collection.as_str().to_string(),
            collection_name: collection,
        }
    }

    pub fn with_collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = collection_id.into();
        self
    }
}

/// System fields of auth collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSystemFields {
    #[serde(flatten)]
    pub base: BaseSystemFields,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_visibility: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub verified: bool,
}

/// Access to the base system fields regardless of collection kind.
pub trait SystemFields {
    fn base(&self) -> &BaseSystemFields;
}

impl SystemFields for BaseSystemFields {
    fn base(&self) -> &BaseSystemFields {
        self
    }
}

impl SystemFields for AuthSystemFields {
    fn base(&self) -> &BaseSystemFields {
        &self.base
    }
}

/// A record as returned by the store: system fields, collection fields and,
/// when requested, the expanded relations.
///
/// `X` is the typed expand payload; collections without a typed expand use
/// `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<R, X = Value, S = BaseSystemFields> {
    #[serde(flatten)]
    pub system: S,
    #[serde(flatten)]
    pub record: R,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub expand: Option<X>,
}

impl<R, X, S> Response<R, X, S> {
    pub fn new(system: S, record: R) -> Self {
        Self {
            system,
            record,
            expand: None,
        }
    }

    pub fn with_expand(mut self, expand: X) -> Self {
        self.expand = Some(expand);
        self
    }
}

impl<R, X, S: SystemFields> Response<R, X, S> {
    pub fn collection_name(&self) -> Collection {
        self.system.base().collection_name
    }
}

impl<R, X, S: SystemFields> Entity for Response<R, X, S> {
    fn id(&self) -> &RecordId {
        &self.system.base().id
    }

    fn collection_id(&self) -> &str {
        &self.system.base().collection_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    #[test]
    fn flattens_system_and_record_fields() {
        let raw = json!({
            "id": "n1",
            "collectionId": "pbc_1",
            "collectionName": "pages",
            "text": "hello",
        });
        let resp: Response<Note> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(resp.id().as_str(), "n1");
        assert_eq!(resp.collection_id(), "pbc_1");
        assert_eq!(resp.collection_name(), Collection::Pages);
        assert_eq!(resp.record.text, "hello");
        assert!(resp.expand.is_none());

        assert_eq!(serde_json::to_value(&resp).unwrap(), raw);
    }

    #[test]
    fn auth_fields_sit_beside_base_fields() {
        let raw = json!({
            "id": "u1",
            "collectionId": "_pb_users_auth_",
            "collectionName": "users",
            "email": "a@example.com",
            "emailVisibility": false,
            "username": "a",
            "verified": true,
            "text": "bio",
        });
        let resp: Response<Note, Value, AuthSystemFields> = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.id().as_str(), "u1");
        assert_eq!(resp.system.email, "a@example.com");
        assert!(resp.system.verified);
        assert_eq!(resp.collection_name(), Collection::Users);
    }

    #[test]
    fn builder_defaults_collection_id_to_name() {
        let system = BaseSystemFields::new("c1", Collection::Categories);
        assert_eq!(system.collection_id, "categories");
        let system = system.with_collection_id("pbc_9");
        assert_eq!(system.collection_id, "pbc_9");
    }
}
