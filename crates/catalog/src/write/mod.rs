//! Create/update payloads for every collection.
//!
//! Create payloads take an optional client-chosen `id` and omit auto-date
//! fields. Update payloads make every field optional. File fields are carried
//! as [`FileUpload`]s and sent as multipart parts rather than JSON, so they are
//! skipped by serialization and exposed through [`WritePayload::files`].
//!
//! Auth collections (`_superusers`, `users`) add the credential fields:
//! `email`, `password`, `passwordConfirm` on create and `oldPassword` on
//! update.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::collection::CollectionRecord;

/// `WritePayload` for payloads without file fields. Defined ahead of the
/// submodules so it is in scope there.
macro_rules! without_files {
    ($($payload:ty),+ $(,)?) => {
        $(
            impl $crate::write::WritePayload for $payload {
                fn files(&self) -> Vec<(&'static str, &$crate::write::FileUpload)> {
                    Vec::new()
                }
            }
        )+
    };
}

pub mod catalog;
pub mod commerce;
pub mod content;
pub mod system;

pub use catalog::*;
pub use commerce::*;
pub use content::*;
pub use system::*;

/// A file to upload into a file field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A body for a create or update call.
pub trait WritePayload: Serialize {
    /// File parts as `(field, file)`; multi-file fields repeat the field name.
    fn files(&self) -> Vec<(&'static str, &FileUpload)>;

    /// JSON (non-file) fields.
    fn fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Create and update shapes of a collection.
pub trait Writable: CollectionRecord {
    type Create: WritePayload;
    type Update: WritePayload;
}

fn single<'a>(
    field: &'static str,
    file: &'a Option<FileUpload>,
) -> Vec<(&'static str, &'a FileUpload)> {
    file.iter().map(|f| (field, f)).collect()
}

fn many<'a>(field: &'static str, files: &'a [FileUpload]) -> Vec<(&'static str, &'a FileUpload)> {
    files.iter().map(|f| (field, f)).collect()
}
