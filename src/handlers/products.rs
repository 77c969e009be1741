//! Handlers for the /product and /products endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_id;
use crate::database::Product;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub start: Option<String>,
    pub count: Option<String>,
}

/// JSON body for POST /product and PUT /product/:id. Price defaults to 0.00
/// when omitted.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}

/// GET /products - list products with start/count paging
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let (start, count) = page_window(query.start.as_deref(), query.count.as_deref());
    let products = state.products.list(start, count).await?;
    Ok(Json(products))
}

/// GET /product/:id - fetch a single product
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id, "Invalid product ID")?;

    match state.products.fetch(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::not_found("Product not found")),
    }
}

/// POST /product - create a product from a JSON body
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid request payload"))?;

    let product = state.products.create(&payload.name, payload.price).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/:id - full replace of name and price
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id, "Invalid product ID")?;
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid request payload"))?;

    match state.products.update(id, &payload.name, payload.price).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::not_found("Product not found")),
    }
}

/// DELETE /product/:id - delete by id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "Invalid product ID")?;

    if state.products.delete(id).await? {
        Ok(Json(json!({ "result": "success" })))
    } else {
        Err(ApiError::not_found("Product not found"))
    }
}

/// Normalize paging parameters: start defaults to 0 and is floored at 0,
/// count defaults to 10 and is clamped to 1..=10. Unparseable values fall
/// back to the defaults rather than erroring.
fn page_window(start: Option<&str>, count: Option<&str>) -> (i64, i64) {
    let mut start: i64 = start.and_then(|s| s.parse().ok()).unwrap_or(0);
    let mut count: i64 = count.and_then(|s| s.parse().ok()).unwrap_or(10);

    if !(1..=10).contains(&count) {
        count = 10;
    }
    if start < 0 {
        start = 0;
    }
    (start, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_defaults_and_clamps() {
        assert_eq!(page_window(None, None), (0, 10));
        assert_eq!(page_window(Some("5"), Some("3")), (5, 3));
        assert_eq!(page_window(Some("-4"), Some("0")), (0, 10));
        assert_eq!(page_window(Some("2"), Some("25")), (2, 10));
        assert_eq!(page_window(Some("abc"), Some("xyz")), (0, 10));
    }
}
