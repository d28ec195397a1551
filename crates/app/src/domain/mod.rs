//! Mali Mali Domain Concerns

pub mod categories;
pub mod products;
pub mod suppliers;
pub mod users;
