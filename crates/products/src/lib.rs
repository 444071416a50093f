//! Storefront view-model mappers.
//!
//! Turns raw record-store responses (see `storefront-catalog`) into the
//! presentation shapes the storefront renders: products with reconciled
//! colour media and aggregated stock, variants and categories. Pure
//! transformations; the only IO lives in the `map-records` binary.

pub mod category;
pub mod config;
pub mod files;
pub mod gender;
pub mod mapper;
pub mod media;
pub mod product;
pub mod stock;
pub mod variant;
pub mod view;

pub use config::{ConfigError, StorefrontConfig};
pub use files::{FileUrlResolver, PocketBaseFiles};
pub use gender::{classify_gender, gender_from_categories, Gender};
pub use mapper::RecordMapper;
pub use media::{media_by_color, reconcile_color_media, ColorMedia};
pub use stock::{StockPolicy, StockStatus};
pub use view::{CategoryView, ProductView, VariantView, PRICE_PLACEHOLDER};
