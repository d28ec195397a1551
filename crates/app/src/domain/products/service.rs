//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    database::Db,
    domain::{
        products::{
            changes::ProductChanges,
            data::{NewProduct, ProductFilter, ProductInput, ProductPatch, validate_name},
            errors::ProductsServiceError,
            records::{ProductDetails, ProductRecord, ProductUuid, UNKNOWN_REFERENCE},
            repository::PgProductsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    /// Resolve display names for what `product` references.
    ///
    /// Lookups run outside any transaction. A reference that does not resolve,
    /// or a lookup that fails, is reported as [`UNKNOWN_REFERENCE`].
    async fn details(&self, product: ProductRecord) -> ProductDetails {
        let category_name = match self
            .repository
            .find_category_name(self.db.pool(), product.owner, product.category)
            .await
        {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_REFERENCE.to_string(),
            Err(error) => {
                warn!(%error, category = %product.category, "failed to resolve category name");
                UNKNOWN_REFERENCE.to_string()
            }
        };

        let supplier_name = match product.supplier {
            None => UNKNOWN_REFERENCE.to_string(),
            Some(supplier) => match self
                .repository
                .find_supplier_name(self.db.pool(), product.owner, supplier)
                .await
            {
                Ok(Some(name)) => name,
                Ok(None) => UNKNOWN_REFERENCE.to_string(),
                Err(error) => {
                    warn!(%error, %supplier, "failed to resolve supplier name");
                    UNKNOWN_REFERENCE.to_string()
                }
            },
        };

        ProductDetails {
            product,
            category_name,
            supplier_name,
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        owner: UserUuid,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_products(&mut tx, owner, &filter)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, owner, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        owner: UserUuid,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = NewProduct::try_from_input(ProductUuid::new(), input)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_product(&mut tx, owner, product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
        patch: ProductPatch,
    ) -> Result<ProductDetails, ProductsServiceError> {
        let changes = ProductChanges::merge(patch)?;

        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        let mut tx = self.db.begin_transaction().await?;

        let current = self.repository.lock_product(&mut tx, owner, product).await?;

        let updated = if changes.is_empty() {
            current
        } else {
            self.repository
                .update_product(&mut tx, &current.apply(&changes))
                .await?
        };

        tx.commit().await?;

        Ok(self.details(updated).await)
    }

    async fn delete_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .delete_product(&mut tx, owner, product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Products owned by `owner`, newest first.
    async fn list_products(
        &self,
        owner: UserUuid,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Validate `input` and store it as a new product.
    async fn create_product(
        &self,
        owner: UserUuid,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Apply the fields present in `patch` and return the stored result with
    /// its category and supplier names.
    async fn update_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
        patch: ProductPatch,
    ) -> Result<ProductDetails, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            categories::{
                CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid,
            },
            products::{
                coerce::RawValue,
                family::{GENERAL_FAMILY, SUFURIA_FAMILY},
                stock::StockStatus,
            },
            suppliers::{
                PgSuppliersService, SuppliersService, data::NewSupplier, records::SupplierUuid,
            },
        },
        test::{TestContext, helpers::product_input},
    };

    use super::*;

    #[tokio::test]
    async fn create_product_derives_family_and_status() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    name: Some("Sufuria 20".to_string()),
                    quantity: Some(RawValue::Integer(3)),
                    low_stock_alert: Some(RawValue::Integer(5)),
                    ..product_input(&ctx)
                },
            )
            .await?;

        assert_eq!(product.owner, ctx.user_uuid);
        assert_eq!(product.family, SUFURIA_FAMILY);
        assert_eq!(product.status, StockStatus::LowStock);
        assert_eq!(product.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_stores_wide_quantities() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    quantity: Some(RawValue::from("5000000000")),
                    ..product_input(&ctx)
                },
            )
            .await?;

        let fetched = ctx.products.get_product(ctx.user_uuid, product.uuid).await?;

        assert_eq!(fetched.quantity, 5_000_000_000);
        assert_eq!(fetched.status, StockStatus::InStock);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_unknown_category_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    category_id: Some(uuid::Uuid::now_v7().to_string()),
                    ..product_input(&ctx)
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_with_another_users_category_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_user("Other User").await;

        let foreign_category = PgCategoriesService::new(ctx.db.pool().clone())
            .create_category(
                other,
                NewCategory {
                    uuid: CategoryUuid::new(),
                    name: "Their Cookware".to_string(),
                },
            )
            .await?;

        let result = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    category_id: Some(foreign_category.uuid.to_string()),
                    ..product_input(&ctx)
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        let listed = ctx
            .products
            .list_products(ctx.user_uuid, ProductFilter::default())
            .await?;

        assert!(listed.is_empty(), "nothing should have been stored");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_with_another_users_supplier_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_user("Other User").await;

        let foreign_supplier = PgSuppliersService::new(ctx.db.pool().clone())
            .create_supplier(
                other,
                NewSupplier {
                    uuid: SupplierUuid::new(),
                    name: "Their Metalworks".to_string(),
                },
            )
            .await?;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let result = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    supplier_id: Some(foreign_supplier.uuid.to_string()),
                    ..ProductPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        let stored = ctx.products.get_product(ctx.user_uuid, product.uuid).await?;

        assert_eq!(stored.supplier, None);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product(ctx.user_uuid, ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_newest_first_and_filtered() -> TestResult {
        let ctx = TestContext::new().await;

        let plates = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    name: Some("Plate Set".to_string()),
                    quantity: Some(RawValue::Integer(0)),
                    ..product_input(&ctx)
                },
            )
            .await?;

        let sufuria = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    name: Some("Big Sufuria Pot".to_string()),
                    ..product_input(&ctx)
                },
            )
            .await?;

        let all = ctx
            .products
            .list_products(ctx.user_uuid, ProductFilter::default())
            .await?;

        let uuids: Vec<ProductUuid> = all.iter().map(|p| p.uuid).collect();

        assert_eq!(uuids, vec![sufuria.uuid, plates.uuid]);
        assert_eq!(all.get(1).map(|p| p.family.as_str()), Some(GENERAL_FAMILY));

        let searched = ctx
            .products
            .list_products(
                ctx.user_uuid,
                ProductFilter {
                    search: Some("SUFURIA".to_string()),
                    available_only: false,
                },
            )
            .await?;

        assert_eq!(searched.len(), 1);

        let available = ctx
            .products
            .list_products(
                ctx.user_uuid,
                ProductFilter {
                    search: None,
                    available_only: true,
                },
            )
            .await?;

        assert_eq!(
            available.iter().map(|p| p.uuid).collect::<Vec<_>>(),
            vec![sufuria.uuid]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_search_treats_wildcards_literally() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    name: Some("Mugs 50% off".to_string()),
                    ..product_input(&ctx)
                },
            )
            .await?;

        ctx.products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    name: Some("Mugs 500".to_string()),
                    ..product_input(&ctx)
                },
            )
            .await?;

        let found = ctx
            .products
            .list_products(
                ctx.user_uuid,
                ProductFilter {
                    search: Some("50%".to_string()),
                    available_only: false,
                },
            )
            .await?;

        assert_eq!(found.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn products_not_visible_to_other_users() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_user("Other").await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let listed = ctx
            .products
            .list_products(other, ProductFilter::default())
            .await?;

        assert!(listed.is_empty(), "other user should not see any products");

        let result = ctx.products.get_product(other, product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_rederives_status_from_stored_threshold() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(
                ctx.user_uuid,
                ProductInput {
                    quantity: Some(RawValue::Integer(20)),
                    low_stock_alert: Some(RawValue::Integer(10)),
                    ..product_input(&ctx)
                },
            )
            .await?;

        let updated = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    quantity: Some(RawValue::from("10")),
                    weight_class: Some(String::new()),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(updated.product.quantity, 10);
        assert_eq!(updated.product.low_stock_alert, 10);
        assert_eq!(updated.product.status, StockStatus::LowStock);
        assert_eq!(updated.product.weight_class, product.weight_class);
        assert_eq!(updated.category_name, "Cookware");
        assert_eq!(updated.supplier_name, UNKNOWN_REFERENCE);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_sets_and_clears_supplier() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let with_supplier = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    supplier_id: Some(ctx.supplier_uuid.to_string()),
                    selling_price: Some(RawValue::Float(650.5)),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(with_supplier.product.supplier, Some(ctx.supplier_uuid));
        assert_eq!(with_supplier.supplier_name, "Jua Kali Metalworks");
        assert_eq!(with_supplier.product.selling_price, Decimal::new(6505, 1));

        let cleared = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    supplier_id: Some(String::new()),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(cleared.product.supplier, None);
        assert_eq!(cleared.supplier_name, UNKNOWN_REFERENCE);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_accepts_explicit_status() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let updated = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    quantity: Some(RawValue::Integer(0)),
                    status: Some("IN_STOCK".to_string()),
                    ..ProductPatch::default()
                },
            )
            .await?;

        assert_eq!(updated.product.status, StockStatus::InStock);
        assert_eq!(updated.product.stock_label().as_str(), "LOW STOCK");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_with_no_changes_returns_stored_product() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let updated = ctx
            .products
            .update_product(ctx.user_uuid, product.uuid, ProductPatch::default())
            .await?;

        assert_eq!(updated.product, product);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_rejects_malformed_quantity() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        let result = ctx
            .products
            .update_product(
                ctx.user_uuid,
                product.uuid,
                ProductPatch {
                    quantity: Some(RawValue::from("abc")),
                    ..ProductPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::Coercion(_))),
            "expected Coercion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                ctx.user_uuid,
                ProductUuid::new(),
                ProductPatch {
                    name: Some("Ghost".to_string()),
                    ..ProductPatch::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(ctx.user_uuid, product_input(&ctx))
            .await?;

        ctx.products
            .delete_product(ctx.user_uuid, product.uuid)
            .await?;

        let result = ctx.products.get_product(ctx.user_uuid, product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .delete_product(ctx.user_uuid, ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
