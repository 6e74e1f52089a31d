// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::auth::{require_basic_auth, UserTable};
use crate::catalog::{CatalogStore, ItemRecord, StoreError};
use crate::errors::ApiError;
use crate::persistence;

pub struct AppState {
    pub catalog: Mutex<CatalogStore>,
    pub catalog_path: PathBuf,
}

pub type SharedState = Arc<AppState>;

pub fn build_router(state: SharedState, users: Arc<UserTable>) -> Router {
    if users.is_empty() {
        tracing::warn!("User table is empty: every request will be rejected with 401");
    }

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(replace_item).delete(delete_item),
        )
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(from_fn_with_state(users, require_basic_auth))
        .layer(TraceLayer::new_for_http())
}

/// Write the catalog table to disk. The caller holds the state lock, so the
/// mutate-then-save sequence other handlers observe is never interleaved.
fn persist(state: &AppState, catalog: &CatalogStore) -> Result<(), ApiError> {
    persistence::save_table(&state.catalog_path, catalog.items()).map_err(|e| {
        metrics::increment_counter!("catalogd_persist_failures_total");
        tracing::error!("Failed to save catalog to {:?}: {}", state.catalog_path, e);
        ApiError::Persistence(e)
    })
}

async fn list_items(State(state): State<SharedState>) -> Json<CatalogResponse> {
    let catalog = state.catalog.lock().await;
    Json(CatalogResponse {
        catalog: catalog.items().clone(),
    })
}

async fn create_item(
    State(state): State<SharedState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidData)?;
    let id = req.id.into_key();
    let record = ItemRecord {
        name: req.name,
        price: req.price,
    };

    let mut catalog = state.catalog.lock().await;
    catalog.insert(id.clone(), record.clone())?;
    persist(&state, &catalog)?;

    metrics::increment_counter!("catalogd_mutations_total", "op" => "create");
    metrics::gauge!("catalogd_catalog_items", catalog.len() as f64);
    tracing::info!("Added item {}", id);

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Item added",
            item: record,
        }),
    ))
}

async fn get_item(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Path(id) = path.map_err(|_| StoreError::NotFound)?;
    let catalog = state.catalog.lock().await;
    let item = catalog.get(&id.to_string())?.clone();
    Ok(Json(ItemResponse { item }))
}

async fn replace_item(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Path(id) = path.map_err(|_| StoreError::NotFound)?;
    let id = id.to_string();

    let mut catalog = state.catalog.lock().await;
    // Existence is checked before the body, so a garbage payload against an
    // absent id still reads as 404.
    if !catalog.contains(&id) {
        return Err(StoreError::NotFound.into());
    }

    let Json(req) = payload.map_err(|_| ApiError::InvalidData)?;
    let record = ItemRecord {
        name: req.name,
        price: req.price,
    };
    catalog.replace(&id, record.clone())?;
    persist(&state, &catalog)?;

    metrics::increment_counter!("catalogd_mutations_total", "op" => "replace");
    tracing::info!("Updated item {}", id);

    Ok(Json(MutationResponse {
        message: "Item updated",
        item: record,
    }))
}

async fn delete_item(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Path(id) = path.map_err(|_| StoreError::NotFound)?;
    let id = id.to_string();

    let mut catalog = state.catalog.lock().await;
    let removed = catalog.remove(&id)?;
    persist(&state, &catalog)?;

    metrics::increment_counter!("catalogd_mutations_total", "op" => "delete");
    metrics::gauge!("catalogd_catalog_items", catalog.len() as f64);
    tracing::info!("Deleted item {}", id);

    Ok(Json(MutationResponse {
        message: "Item deleted",
        item: removed,
    }))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
