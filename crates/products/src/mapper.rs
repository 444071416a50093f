//! The record mapper: file resolution + stock policy shared by every mapping.

use crate::config::StorefrontConfig;
use crate::files::{FileUrlResolver, PocketBaseFiles};
use crate::stock::{StockPolicy, StockStatus};

/// Converts store records into view models.
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent renders as long as the resolver is `Sync`.
#[derive(Debug, Clone)]
pub struct RecordMapper<F = PocketBaseFiles> {
    files: F,
    stock: StockPolicy,
}

impl<F: FileUrlResolver> RecordMapper<F> {
    pub fn new(files: F, stock: StockPolicy) -> Self {
        Self { files, stock }
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock
    }

    pub(crate) fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String {
        self.files.file_url(collection, record_id, filename)
    }

    pub(crate) fn stock_status(&self, quantity: i64) -> StockStatus {
        self.stock.status_for(quantity)
    }
}

impl RecordMapper<PocketBaseFiles> {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(
            PocketBaseFiles::new(config.backend_url.clone()),
            config.stock_policy(),
        )
    }
}

/// Collection key for file URLs: the record's collection id, or the
/// collection name when the id is missing.
pub(crate) fn collection_key<'a>(collection_id: &'a str, fallback: &'a str) -> &'a str {
    if collection_id.is_empty() {
        fallback
    } else {
        collection_id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_key_falls_back_to_name() {
        assert_eq!(collection_key("", "products"), "products");
        assert_eq!(collection_key("pbc_1", "products"), "pbc_1");
    }

    #[test]
    fn from_config_uses_backend_url_and_threshold() {
        let cfg = StorefrontConfig {
            backend_url: "https://pb.example.com/".to_string(),
            low_stock_threshold: 1,
        };
        let mapper = RecordMapper::from_config(&cfg);
        assert_eq!(mapper.files().base_url(), "https://pb.example.com");
        assert_eq!(mapper.stock_status(2), StockStatus::InStock);
        assert_eq!(mapper.stock_status(1), StockStatus::LowStock);
    }
}
