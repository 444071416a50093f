//! Stock status classification.

use serde::{Deserialize, Serialize};

/// Inventory classification shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn is_purchasable(&self) -> bool {
        match self {
            StockStatus::InStock | StockStatus::LowStock => true,
            StockStatus::OutOfStock => false,
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds for [`StockStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockPolicy {
    low_stock_threshold: i64,
}

impl StockPolicy {
    pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

    /// Quantities in `1..=low_stock_threshold` are low stock. A threshold of
    /// `0` disables the low-stock band.
    pub fn new(low_stock_threshold: i64) -> Self {
        Self {
            low_stock_threshold: low_stock_threshold.max(0),
        }
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    /// Total over every integer; anything `<= 0` is out of stock.
    pub fn status_for(&self, quantity: i64) -> StockStatus {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_bands() {
        let policy = StockPolicy::default();
        assert_eq!(policy.status_for(0), StockStatus::OutOfStock);
        assert_eq!(policy.status_for(1), StockStatus::LowStock);
        assert_eq!(policy.status_for(5), StockStatus::LowStock);
        assert_eq!(policy.status_for(6), StockStatus::InStock);
        assert_eq!(policy.status_for(-3), StockStatus::OutOfStock);
    }

    #[test]
    fn zero_threshold_has_no_low_band() {
        let policy = StockPolicy::new(0);
        assert_eq!(policy.status_for(1), StockStatus::InStock);
        assert_eq!(StockPolicy::new(-4).low_stock_threshold(), 0);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(StockStatus::OutOfStock).unwrap(),
            "out_of_stock"
        );
        assert_eq!(StockStatus::LowStock.to_string(), "low_stock");
        assert!(!StockStatus::OutOfStock.is_purchasable());
    }

    proptest! {
        /// Property: status is monotone in quantity (more stock never looks worse).
        #[test]
        fn status_is_monotone(threshold in 0i64..50, a in -10i64..200, b in -10i64..200) {
            let policy = StockPolicy::new(threshold);
            let rank = |s: StockStatus| match s {
                StockStatus::OutOfStock => 0,
                StockStatus::LowStock => 1,
                StockStatus::InStock => 2,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(policy.status_for(lo)) <= rank(policy.status_for(hi)));
        }

        /// Property: only positive quantities are purchasable.
        #[test]
        fn purchasable_iff_positive(q in any::<i64>()) {
            let status = StockPolicy::default().status_for(q);
            prop_assert_eq!(status.is_purchasable(), q > 0);
        }
    }
}
