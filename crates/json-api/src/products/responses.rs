//! Product response bodies.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use malimali_app::{
    products::records::{ProductDetails, ProductRecord},
    suppliers::records::SupplierUuid,
};

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub family: String,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<f64>,
    pub selling_price: f64,
    pub quantity: u64,
    pub low_stock_alert: u32,

    /// Stored status, `IN_STOCK` or `LOW_STOCK`.
    pub status: String,

    /// Computed on read, `OK` or `LOW STOCK`.
    pub stock_status: String,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub supplier_id: Option<Uuid>,

    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into_uuid(),
            stock_status: product.stock_label().to_string(),
            status: product.status.to_string(),
            name: product.name,
            family: product.family,
            weight_class: product.weight_class,
            size: product.size,
            buying_price: product.buying_price.map(price),
            selling_price: price(product.selling_price),
            quantity: product.quantity,
            low_stock_alert: product.low_stock_alert,
            user_id: product.owner.into_uuid(),
            category_id: product.category.into_uuid(),
            supplier_id: product.supplier.map(SupplierUuid::into_uuid),
            created_at: product.created_at.to_string(),
        }
    }
}

/// Product with the names of its category and supplier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsResponse {
    #[serde(flatten)]
    pub product: ProductResponse,

    /// Category name, `Unknown` when it cannot be resolved.
    pub category: String,

    /// Supplier name, `Unknown` when unset or unresolved.
    pub supplier: String,
}

impl From<ProductDetails> for ProductDetailsResponse {
    fn from(details: ProductDetails) -> Self {
        ProductDetailsResponse {
            product: details.product.into(),
            category: details.category_name,
            supplier: details.supplier_name,
        }
    }
}

fn price(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}
