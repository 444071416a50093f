//! `storefront-core`: shared primitives for the storefront record layer.
//!
//! This crate contains **pure** building blocks (no IO, no HTTP, no storage):
//! identifiers, file names, store dates, and the schema error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{SchemaError, SchemaResult};
pub use id::RecordId;
pub use value_object::{FileName, IsoDate};
