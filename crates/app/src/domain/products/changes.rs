//! Sparse product change-sets.

use rust_decimal::Decimal;

use crate::domain::{
    categories::records::CategoryUuid,
    products::{
        coerce::{
            CoercionError, RawValue, non_blank, present, to_low_stock_alert, to_price,
            to_quantity, to_uuid,
        },
        data::ProductPatch,
        records::ProductRecord,
        stock::{StockStatus, derive_status},
    },
    suppliers::records::SupplierUuid,
};

/// Change to a field that may be cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Patch<T> {
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }

    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Fields to change on a stored product; `None` and [`Patch::Keep`] leave the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub family: Option<String>,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<Decimal>,
    pub selling_price: Option<Decimal>,
    pub quantity: Option<u64>,
    pub low_stock_alert: Option<u32>,
    pub category: Option<CategoryUuid>,
    pub supplier: Patch<SupplierUuid>,
    pub status: Option<StockStatus>,
}

impl ProductChanges {
    /// Build a change-set from an update payload.
    ///
    /// Blank text and empty numbers are skipped. `supplierId` of exactly `""`
    /// clears the supplier.
    pub fn merge(patch: ProductPatch) -> Result<Self, CoercionError> {
        let supplier = match patch.supplier_id {
            None => Patch::Keep,
            Some(id) if id.is_empty() => Patch::Clear,
            Some(id) if id.trim().is_empty() => Patch::Keep,
            Some(id) => Patch::Set(to_uuid("supplierId", &id)?),
        };

        Ok(Self {
            name: non_blank(patch.name),
            family: non_blank(patch.family),
            weight_class: non_blank(patch.weight_class),
            size: non_blank(patch.size),
            buying_price: coerce(patch.buying_price, |value| to_price("buyingPrice", value))?,
            selling_price: coerce(patch.selling_price, |value| {
                to_price("sellingPrice", value)
            })?,
            quantity: coerce(patch.quantity, |value| to_quantity("quantity", value))?,
            low_stock_alert: coerce(patch.low_stock_alert, |value| {
                to_low_stock_alert("lowStockAlert", value)
            })?,
            category: non_blank(patch.category_id)
                .map(|id| to_uuid("categoryId", &id))
                .transpose()?,
            supplier,
            status: non_blank(patch.status)
                .map(|status| status.parse::<StockStatus>())
                .transpose()?,
        })
    }

    /// Whether the change-set touches quantity or threshold.
    pub const fn touches_stock(&self) -> bool {
        self.quantity.is_some() || self.low_stock_alert.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn coerce<T>(
    value: Option<RawValue>,
    convert: impl FnOnce(&RawValue) -> Result<T, CoercionError>,
) -> Result<Option<T>, CoercionError> {
    present(value).as_ref().map(convert).transpose()
}

impl ProductRecord {
    /// The product as it is after `changes`.
    ///
    /// An explicit status is kept as given. Otherwise status is derived again
    /// whenever quantity or threshold are part of the change-set.
    #[must_use]
    pub fn apply(&self, changes: &ProductChanges) -> Self {
        let quantity = changes.quantity.unwrap_or(self.quantity);
        let low_stock_alert = changes.low_stock_alert.unwrap_or(self.low_stock_alert);

        let status = match changes.status {
            Some(status) => status,
            None if changes.touches_stock() => derive_status(quantity, low_stock_alert),
            None => self.status,
        };

        Self {
            uuid: self.uuid,
            owner: self.owner,
            category: changes.category.unwrap_or(self.category),
            supplier: changes.supplier.apply(self.supplier),
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            family: changes.family.clone().unwrap_or_else(|| self.family.clone()),
            weight_class: changes.weight_class.clone().or_else(|| self.weight_class.clone()),
            size: changes.size.clone().or_else(|| self.size.clone()),
            buying_price: changes.buying_price.or(self.buying_price),
            selling_price: changes.selling_price.unwrap_or(self.selling_price),
            quantity,
            low_stock_alert,
            status,
            created_at: self.created_at,
        }
    }
}
