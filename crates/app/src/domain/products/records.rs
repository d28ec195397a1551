//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        categories::records::CategoryUuid,
        products::stock::{StockLabel, StockStatus, stock_label},
        suppliers::records::SupplierUuid,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Name reported for a category or supplier that no longer resolves.
pub const UNKNOWN_REFERENCE: &str = "Unknown";

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub owner: UserUuid,
    pub category: CategoryUuid,
    pub supplier: Option<SupplierUuid>,
    pub name: String,
    pub family: String,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<Decimal>,
    pub selling_price: Decimal,
    pub quantity: u64,
    pub low_stock_alert: u32,
    pub status: StockStatus,
    pub created_at: Timestamp,
}

impl ProductRecord {
    /// Read-time stock label; independent of the persisted [`StockStatus`].
    #[must_use]
    pub fn stock_label(&self) -> StockLabel {
        stock_label(self.quantity, self.low_stock_alert)
    }
}

/// A product together with the display names of what it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: ProductRecord,
    pub category_name: String,
    pub supplier_name: String,
}
