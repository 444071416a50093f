//! Entity trait: records addressed by collection and id.

use crate::id::RecordId;

/// Anything the record store identifies by collection + id.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> &RecordId;

    /// Collection identifier the record lives in (e.g. `pbc_4092854851`).
    fn collection_id(&self) -> &str;
}
