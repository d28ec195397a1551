//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error, requests::UpdateProductRequest,
        responses::ProductDetailsResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// Applies the fields present in the body. Blank values keep the stored value
/// and `supplierId: ""` removes the supplier.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let (product, patch) = json.into_inner().into_parts();

    let product = product.ok_or_else(|| StatusError::bad_request().brief("Product ID is required"))?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("product_uuid", tracing::field::display(product));

    let details = state
        .app
        .products
        .update_product(user, product.into(), patch)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        product_uuid = %product,
        status = %details.product.status,
        "updated product"
    );

    Ok(Json(details.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use malimali_app::products::{
        MockProductsService, ProductsServiceError,
        coerce::RawValue,
        records::{ProductDetails, ProductUuid, UNKNOWN_REFERENCE},
    };

    use crate::test_helpers::{TEST_USER_UUID, make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut product = make_product(uuid);

        product.quantity = 40;

        let details = ProductDetails {
            product,
            category_name: "Cookware".to_string(),
            supplier_name: UNKNOWN_REFERENCE.to_string(),
        };

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |user, u, patch| {
                *user == TEST_USER_UUID
                    && *u == uuid
                    && patch.quantity == Some(RawValue::Integer(40))
                    && patch.weight_class.as_deref() == Some("")
                    && patch.supplier_id.as_deref() == Some("")
            })
            .return_once(move |_, _, _| Ok(details));

        let mut res = TestClient::put("http://example.com/products")
            .json(&json!({
                "id": uuid.into_uuid(),
                "quantity": 40,
                "weightClass": "",
                "supplierId": "",
            }))
            .send(&make_service(products))
            .await;

        let body: ProductDetailsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.product.id, uuid.into_uuid());
        assert_eq!(body.product.quantity, 40);
        assert_eq!(body.category, "Cookware");
        assert_eq!(body.supplier, "Unknown");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_without_id_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/products")
            .json(&json!({ "quantity": 40 }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_missing_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |_, u, _| *u == uuid)
            .return_once(|_, _, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put("http://example.com/products")
            .json(&json!({ "id": uuid.into_uuid(), "name": "Sufuria 24" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_unknown_supplier_returns_400() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::InvalidReference));

        let res = TestClient::put("http://example.com/products")
            .json(&json!({ "id": uuid.into_uuid(), "supplierId": uuid.into_uuid() }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
