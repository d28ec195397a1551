//! Stock status derivation.

use std::{fmt, str::FromStr};

use crate::domain::products::coerce::CoercionError;

/// Threshold used when a product is created without a low-stock alert.
pub const DEFAULT_LOW_STOCK_ALERT: u32 = 5;

/// Persisted stock status, derived when a product is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl StockStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::LowStock => "LOW_STOCK",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = CoercionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "IN_STOCK" => Ok(Self::InStock),
            "LOW_STOCK" => Ok(Self::LowStock),
            other => Err(CoercionError::new(
                "status",
                format!("unknown stock status {other:?}"),
            )),
        }
    }
}

/// Display label computed on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLabel {
    Ok,
    LowStock,
}

impl StockLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::LowStock => "LOW STOCK",
        }
    }
}

impl fmt::Display for StockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_low(quantity: u64, low_stock_alert: u32) -> bool {
    quantity <= u64::from(low_stock_alert)
}

/// A product is low on stock once its quantity reaches the alert threshold.
#[must_use]
pub fn derive_status(quantity: u64, low_stock_alert: u32) -> StockStatus {
    if is_low(quantity, low_stock_alert) {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

#[must_use]
pub fn stock_label(quantity: u64, low_stock_alert: u32) -> StockLabel {
    if is_low(quantity, low_stock_alert) {
        StockLabel::LowStock
    } else {
        StockLabel::Ok
    }
}
