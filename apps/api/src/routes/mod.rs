//! HTTP route handlers.
//!
//! - [`category`] - `/api/v1/categories`
//! - [`vendor`] - `/api/v1/vendors`
//! - [`health`] - `/api/health`

use serde::Deserialize;

pub mod category;
pub mod health;
pub mod vendor;

#[cfg(test)]
pub(crate) mod testing;

/// Create payload: a single document or an array of them.
///
/// ```json
/// { "description": "Fruits" }
/// [ { "description": "Fruits" }, { "description": "Nuts" } ]
/// ```
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
