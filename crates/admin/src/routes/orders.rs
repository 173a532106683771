//! Order row and order details handlers.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use stockroom_core::OrderId;
use tracing::instrument;

use crate::{
    dashboard::{Dashboard, FulfillmentMethod, ModalPhase},
    error::AppError,
    state::AppState,
};

/// Transition-end acknowledgment from the page.
#[derive(Debug, Deserialize)]
pub struct TransitionForm {
    pub generation: u64,
}

/// Result of an acknowledgment.
#[derive(Debug, Serialize)]
pub struct TransitionAck {
    pub completed: bool,
    pub phase: ModalPhase,
}

/// Fulfillment dropdown intent.
#[derive(Debug, Deserialize)]
pub struct FulfillmentForm {
    /// `toggle`, `choose` or `outside`.
    pub action: String,
    /// Method label, for `choose`.
    pub option: Option<String>,
}

/// Arm the fallback timer if the drawer is mid-transition.
pub fn schedule_pending_transition(state: &AppState, dashboard: &Dashboard) {
    let details = dashboard.details();
    if matches!(details.phase(), ModalPhase::Opening | ModalPhase::Closing) {
        state.schedule_transition_fallback(details.generation());
    }
}

/// Row checkbox. Selecting a row also opens its details.
#[instrument(skip(state))]
pub async fn toggle_selection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    let mut dashboard = state.dashboard().write().await;
    dashboard.toggle_order_selection(OrderId::new(id))?;
    schedule_pending_transition(&state, &dashboard);
    Ok(Redirect::to("/"))
}

/// Row menu "View Details".
#[instrument(skip(state))]
pub async fn open_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    let mut dashboard = state.dashboard().write().await;
    dashboard.open_order_details(OrderId::new(id))?;
    schedule_pending_transition(&state, &dashboard);
    Ok(Redirect::to("/"))
}

/// Close button or backdrop click.
#[instrument(skip(state))]
pub async fn close_details(State(state): State<AppState>) -> Redirect {
    let mut dashboard = state.dashboard().write().await;
    dashboard.close_order_details();
    schedule_pending_transition(&state, &dashboard);
    Redirect::to("/")
}

/// `transitionend` reported by the page.
#[instrument(skip(state))]
pub async fn transition_end(
    State(state): State<AppState>,
    Form(form): Form<TransitionForm>,
) -> Json<TransitionAck> {
    let mut dashboard = state.dashboard().write().await;
    let completed = dashboard.acknowledge_transition(form.generation);
    Json(TransitionAck {
        completed,
        phase: dashboard.details().phase(),
    })
}

/// "Fulfill with:" dropdown.
#[instrument(skip(state))]
pub async fn fulfillment(
    State(state): State<AppState>,
    Form(form): Form<FulfillmentForm>,
) -> Result<Redirect, AppError> {
    let mut dashboard = state.dashboard().write().await;
    match form.action.as_str() {
        "toggle" => dashboard.toggle_fulfillment_dropdown(),
        "outside" => dashboard.fulfillment_pointer_down(false),
        "choose" => {
            let label = form.option.as_deref().unwrap_or_default();
            let method = FulfillmentMethod::from_label(label).ok_or_else(|| {
                AppError::BadRequest(format!("unknown fulfillment method: {label}"))
            })?;
            dashboard.choose_fulfillment(method);
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "unknown fulfillment action: {other}"
            )));
        }
    }
    Ok(Redirect::to("/"))
}
