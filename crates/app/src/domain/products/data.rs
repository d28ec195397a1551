//! Products Data

use rust_decimal::Decimal;

use crate::domain::{
    categories::records::CategoryUuid,
    products::{
        coerce::{
            RawValue, non_blank, present, to_low_stock_alert, to_price, to_quantity, to_uuid,
        },
        errors::ProductsServiceError,
        family::family_of,
        records::ProductUuid,
        stock::{DEFAULT_LOW_STOCK_ALERT, StockStatus, derive_status},
    },
    suppliers::records::SupplierUuid,
};

/// Longest product name accepted.
pub const MAX_NAME_LENGTH: usize = 100;

const MISSING_REQUIRED_FIELDS: &str =
    "Missing required fields: name, sellingPrice, quantity, categoryId";

/// Create payload as received; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub family: Option<String>,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<RawValue>,
    pub selling_price: Option<RawValue>,
    pub quantity: Option<RawValue>,
    pub low_stock_alert: Option<RawValue>,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
}

/// Update payload as received; see [`ProductChanges::merge`](super::changes::ProductChanges::merge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub family: Option<String>,
    pub weight_class: Option<String>,
    pub size: Option<String>,
    pub buying_price: Option<RawValue>,
    pub selling_price: Option<RawValue>,
    pub quantity: Option<RawValue>,
    pub low_stock_alert: Option<RawValue>,
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
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
}

impl NewProduct {
    /// Validate a create payload and fill in derived fields.
    pub fn try_from_input(uuid: ProductUuid, input: ProductInput) -> Result<Self, ProductsServiceError> {
        let (Some(name), Some(selling_price), Some(quantity), Some(category_id)) = (
            non_blank(input.name),
            present(input.selling_price),
            present(input.quantity),
            input.category_id.filter(|id| !id.trim().is_empty()),
        ) else {
            return Err(ProductsServiceError::Validation(
                MISSING_REQUIRED_FIELDS.to_string(),
            ));
        };

        validate_name(&name)?;

        let quantity = to_quantity("quantity", &quantity)?;
        let low_stock_alert = present(input.low_stock_alert)
            .map(|value| to_low_stock_alert("lowStockAlert", &value))
            .transpose()?
            .unwrap_or(DEFAULT_LOW_STOCK_ALERT);

        Ok(Self {
            uuid,
            category: to_uuid("categoryId", &category_id)?,
            supplier: non_blank(input.supplier_id)
                .map(|id| to_uuid("supplierId", &id))
                .transpose()?,
            family: family_of(input.family.as_deref(), &name),
            name,
            weight_class: non_blank(input.weight_class),
            size: non_blank(input.size),
            buying_price: present(input.buying_price)
                .map(|value| to_price("buyingPrice", &value))
                .transpose()?,
            selling_price: to_price("sellingPrice", &selling_price)?,
            quantity,
            low_stock_alert,
            status: derive_status(quantity, low_stock_alert),
        })
    }
}

/// Names must be non-empty and at most [`MAX_NAME_LENGTH`] characters.
pub(crate) fn validate_name(name: &str) -> Result<(), ProductsServiceError> {
    if name.trim().is_empty() {
        return Err(ProductsServiceError::Validation(
            "Product Name is required".to_string(),
        ));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductsServiceError::Validation(format!(
            "Product Name must be {MAX_NAME_LENGTH} characters or less"
        )));
    }

    Ok(())
}

/// List filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name; blank means no filter.
    pub search: Option<String>,

    /// Only products with a positive quantity.
    pub available_only: bool,
}

impl ProductFilter {
    /// The search term as a `LIKE` pattern, with wildcards in the term escaped.
    pub(crate) fn search_pattern(&self) -> Option<String> {
        let term = self.search.as_deref()?.trim();

        if term.is_empty() {
            return None;
        }

        let escaped = term
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");

        Some(format!("%{escaped}%"))
    }
}
