//! `storefront-catalog`: typed description of every record-store collection.
//!
//! Purely declarative: record shapes, option sets, response/create/update
//! payloads and the typed relation-expansion payloads. Deserialization is
//! lenient where the store is loose (empty selects, numeric strings, one-or-many
//! relations) so that downstream mapping never has to fail.

pub mod collection;
pub mod expand;
pub mod options;
pub mod records;
pub mod response;
pub mod serde_helpers;
pub mod write;

pub use collection::{Collection, CollectionRecord};
pub use expand::{back_relation, ProductExpand, PRODUCT_VARIANTS_RELATION};
pub use options::{
    CollectionImagesPosition, CouponType, NavigationLocation, OrderStatus, UiAssetsGroup,
    UiSectionType, UserListType,
};
pub use records::*;
pub use response::{AuthSystemFields, BaseSystemFields, Response, SystemFields};
pub use serde_helpers::OneOrMany;
pub use write::{FileUpload, Writable, WritePayload};
