//! Product Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use malimali_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(message) => StatusError::bad_request().brief(message),
        ProductsServiceError::Coercion(source) => {
            warn!("rejected product payload: {source}");

            StatusError::bad_request()
                .brief("Invalid product payload")
                .detail(source.to_string())
        }
        ProductsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown category or supplier")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
