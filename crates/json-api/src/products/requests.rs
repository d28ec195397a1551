//! Product request bodies.
//!
//! Every field is optional so that missing and malformed values reach the
//! domain validation instead of failing JSON extraction.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use malimali_app::products::{
    coerce::RawValue,
    data::{ProductInput, ProductPatch},
};

/// A numeric field as sent: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<FieldValue> for RawValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Integer(integer) => RawValue::Integer(integer),
            FieldValue::Float(float) => RawValue::Float(float),
            FieldValue::Text(text) => RawValue::Text(text),
        }
    }
}

/// Create Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub name: Option<String>,

    /// Derived from the name when omitted.
    pub family: Option<String>,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<FieldValue>,
    pub selling_price: Option<FieldValue>,
    pub quantity: Option<FieldValue>,

    /// Defaults to 5.
    pub low_stock_alert: Option<FieldValue>,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl From<CreateProductRequest> for ProductInput {
    fn from(request: CreateProductRequest) -> Self {
        ProductInput {
            name: request.name,
            family: request.family,
            weight_class: request.weight_class,
            size: request.size,
            buying_price: request.buying_price.map(Into::into),
            selling_price: request.selling_price.map(Into::into),
            quantity: request.quantity.map(Into::into),
            low_stock_alert: request.low_stock_alert.map(Into::into),
            category_id: request.category_id,
            supplier_id: request.supplier_id,
        }
    }
}

/// Update Product Request
///
/// Blank values leave the stored field unchanged, except `supplierId: ""`
/// which removes the supplier.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    /// Product to update.
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<FieldValue>,
    pub selling_price: Option<FieldValue>,
    pub quantity: Option<FieldValue>,
    pub low_stock_alert: Option<FieldValue>,

    /// `IN_STOCK` or `LOW_STOCK`; stored as given.
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl UpdateProductRequest {
    /// Split into the target id and the requested changes.
    pub(crate) fn into_parts(self) -> (Option<Uuid>, ProductPatch) {
        let patch = ProductPatch {
            name: self.name,
            family: self.family,
            weight_class: self.weight_class,
            size: self.size,
            buying_price: self.buying_price.map(Into::into),
            selling_price: self.selling_price.map(Into::into),
            quantity: self.quantity.map(Into::into),
            low_stock_alert: self.low_stock_alert.map(Into::into),
            status: self.status,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
        };

        (self.id, patch)
    }
}

/// Delete Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteProductRequest {
    /// Product to delete.
    pub id: Option<Uuid>,
}
