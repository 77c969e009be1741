pub mod products;
pub mod store;

// Re-export handler functions for use in routing
pub use products::create as product_create;
pub use products::delete as product_delete;
pub use products::get as product_get;
pub use products::list as product_list;
pub use products::update as product_update;

pub use store::create_entries as store_create;
pub use store::list_products as store_products;

use crate::error::ApiError;

/// Parse a numeric id path segment, mapping failure to a 400 with the given
/// message
pub(crate) fn parse_id(raw: &str, message: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request(message))
}
