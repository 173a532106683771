//! Product row handlers.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use stockroom_core::ProductId;
use tracing::instrument;

use crate::{error::AppError, state::AppState};

/// Row checkbox.
#[instrument(skip(state))]
pub async fn toggle_selection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state
        .dashboard()
        .write()
        .await
        .toggle_product_selection(ProductId::new(id))?;
    Ok(Redirect::to("/"))
}

/// Row menu "Duplicate".
#[instrument(skip(state))]
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state
        .dashboard()
        .write()
        .await
        .duplicate_product(ProductId::new(id))?;
    Ok(Redirect::to("/"))
}

/// Row menu "Delete".
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state
        .dashboard()
        .write()
        .await
        .delete_product(ProductId::new(id))?;
    Ok(Redirect::to("/"))
}

/// Row menu "Edit". Only recorded in the log.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state
        .dashboard()
        .read()
        .await
        .request_product_edit(ProductId::new(id))?;
    Ok(Redirect::to("/"))
}
