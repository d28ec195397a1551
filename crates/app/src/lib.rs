//! Mali Mali inventory domain and persistence.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use domain::{categories, products, suppliers, users};
pub use uuids::TypedUuid;
