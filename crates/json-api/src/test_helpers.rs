//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use malimali_app::{
    auth::MockAuthService,
    categories::records::CategoryUuid,
    context::AppContext,
    products::{
        MockProductsService,
        records::{ProductRecord, ProductUuid},
        stock::StockStatus,
    },
    users::records::UserUuid,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        owner: TEST_USER_UUID,
        category: CategoryUuid::from_uuid(Uuid::nil()),
        supplier: None,
        name: "Plate Set".to_string(),
        family: "General Items".to_string(),
        weight_class: Some("Heavy".to_string()),
        size: None,
        buying_price: None,
        selling_price: Decimal::new(500, 0),
        quantity: 12,
        low_stock_alert: 5,
        status: StockStatus::InStock,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with(products: MockProductsService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state_with(products, MockAuthService::new())
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(MockProductsService::new(), auth)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .hoop(inject_user)
            .push(route),
    )
}
