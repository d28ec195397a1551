//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, PgExecutor, Postgres, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};

use crate::domain::{
    categories::records::CategoryUuid,
    products::{
        data::{NewProduct, ProductFilter},
        records::{ProductRecord, ProductUuid},
        stock::StockStatus,
    },
    suppliers::records::SupplierUuid,
    users::records::UserUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const FIND_CATEGORY_NAME_SQL: &str = include_str!("sql/find_category_name.sql");
const FIND_SUPPLIER_NAME_SQL: &str = include_str!("sql/find_supplier_name.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(owner.into_uuid())
            .bind(filter.search_pattern())
            .bind(filter.available_only)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(owner.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read a product and hold its row lock until the transaction ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(owner.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(product.category.into_uuid())
            .bind(product.supplier.map(SupplierUuid::into_uuid))
            .bind(product.name)
            .bind(product.family)
            .bind(product.weight_class)
            .bind(product.size)
            .bind(product.buying_price)
            .bind(product.selling_price)
            .bind(quantity_column(product.quantity)?)
            .bind(low_stock_alert_column(product.low_stock_alert)?)
            .bind(product.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Write every mutable column of `product` back to its row.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.owner.into_uuid())
            .bind(product.uuid.into_uuid())
            .bind(product.category.into_uuid())
            .bind(product.supplier.map(SupplierUuid::into_uuid))
            .bind(&product.name)
            .bind(&product.family)
            .bind(&product.weight_class)
            .bind(&product.size)
            .bind(product.buying_price)
            .bind(product.selling_price)
            .bind(quantity_column(product.quantity)?)
            .bind(low_stock_alert_column(product.low_stock_alert)?)
            .bind(product.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(owner.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn find_category_name<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        owner: UserUuid,
        category: CategoryUuid,
    ) -> Result<Option<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(FIND_CATEGORY_NAME_SQL)
            .bind(category.into_uuid())
            .bind(owner.into_uuid())
            .fetch_optional(executor)
            .await
    }

    pub(crate) async fn find_supplier_name<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        owner: UserUuid,
        supplier: SupplierUuid,
    ) -> Result<Option<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(FIND_SUPPLIER_NAME_SQL)
            .bind(supplier.into_uuid())
            .bind(owner.into_uuid())
            .fetch_optional(executor)
            .await
    }
}

fn quantity_column(quantity: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn low_stock_alert_column(low_stock_alert: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(low_stock_alert).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i64: i64 = row.try_get("quantity")?;
        let low_stock_alert_i32: i32 = row.try_get("low_stock_alert")?;
        let status: String = row.try_get("status")?;

        let quantity = u64::try_from(quantity_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        let low_stock_alert =
            u32::try_from(low_stock_alert_i32).map_err(|e| sqlx::Error::ColumnDecode {
                index: "low_stock_alert".to_string(),
                source: Box::new(e),
            })?;

        let status = status
            .parse::<StockStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            owner: UserUuid::from_uuid(row.try_get("user_uuid")?),
            category: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            supplier: row
                .try_get::<Option<uuid::Uuid>, _>("supplier_uuid")?
                .map(SupplierUuid::from_uuid),
            name: row.try_get("name")?,
            family: row.try_get("family")?,
            weight_class: row.try_get("weight_class")?,
            size: row.try_get("size")?,
            buying_price: row.try_get("buying_price")?,
            selling_price: row.try_get("selling_price")?,
            quantity,
            low_stock_alert,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
