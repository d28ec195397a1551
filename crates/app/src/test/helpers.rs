//! Test Helpers

use crate::{domain::products::{coerce::RawValue, data::ProductInput}, test::TestContext};

/// A valid create payload referencing the context's default category.
pub(crate) fn product_input(ctx: &TestContext) -> ProductInput {
    ProductInput {
        name: Some("Plate Set".to_string()),
        weight_class: Some("Heavy".to_string()),
        selling_price: Some(RawValue::Integer(500)),
        quantity: Some(RawValue::Integer(12)),
        category_id: Some(ctx.category_uuid.to_string()),
        ..ProductInput::default()
    }
}
