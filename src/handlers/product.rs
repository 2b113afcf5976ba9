//! Product CRUD handlers: list, create, show, update, delete.

use crate::error::AppError;
use crate::model::ProductDraft;
use crate::service::{validate_create, validate_update, ProductService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<impl IntoResponse, AppError> {
    validate_create(&draft)?;
    // validate_create guarantees both fields are present.
    let name = draft.name.as_deref().unwrap_or_default();
    let price = draft.price.unwrap_or_default();
    let product = ProductService::create(&state.pool, name, price).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> Result<impl IntoResponse, AppError> {
    validate_update(&draft)?;
    let product = ProductService::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !ProductService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("product {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
