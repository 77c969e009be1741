//! Handlers for the /store endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::parse_id;
use crate::database::{NewStoreEntry, StoreEntry, StoreProduct};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /store/:id/products - all entries for a store, enriched with product
/// name and price
pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoreProduct>>, ApiError> {
    let store_id = parse_id(&id, "Invalid store ID")?;

    let entries = state.store.list_products(store_id).await?;
    Ok(Json(entries))
}

/// POST /store/:id - bulk-create store entries from a JSON array body.
/// A duplicate `(store, product)` pair or an unknown product id surfaces the
/// database's error text at 500; the batch is transactional, so nothing is
/// kept on failure.
pub async fn create_entries(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Vec<NewStoreEntry>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<StoreEntry>>), ApiError> {
    let store_id = parse_id(&id, "Invalid store ID")?;
    let Json(entries) = payload.map_err(|_| ApiError::bad_request("Invalid request payload"))?;

    let created = state.store.add_entries(store_id, &entries).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
