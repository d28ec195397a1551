//! App Router

use salvo::Router;

use crate::{auth, healthcheck, products};

/// All routes; product routes require a bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new().hoop(auth::middleware::handler).push(
                Router::with_path("products")
                    .get(products::index::handler)
                    .post(products::create::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler)
                    .push(Router::with_path("{product}").get(products::get::handler)),
            ),
        )
}
