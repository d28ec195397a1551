//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use malimali_app::products::data::ProductFilter;

use crate::{extensions::*, products::responses::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns the caller's products, newest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    available: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let filter = ProductFilter {
        search: search.into_inner(),
        available_only: available
            .into_inner()
            .map(|value| value.parse::<bool>())
            .transpose()
            .or_400("could not parse \"available\" query parameter")?
            .unwrap_or_default(),
    };

    let products = state
        .app
        .products
        .list_products(user, filter)
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use malimali_app::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|user, filter| *user == TEST_USER_UUID && *filter == ProductFilter::default())
            .return_once(|_, _| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty(), "expected no products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_keeps_service_order() -> TestResult {
        let newer = ProductUuid::new();
        let older = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move |_, _| Ok(vec![make_product(newer), make_product(older)]));

        let body: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let ids: Vec<_> = body.iter().map(|product| product.id).collect();

        assert_eq!(ids, vec![newer.into_uuid(), older.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_search_and_availability() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|_, filter| {
                *filter
                    == ProductFilter {
                        search: Some("sufuria".to_string()),
                        available_only: true,
                    }
            })
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?search=sufuria&available=true")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_available_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products?available=maybe")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
