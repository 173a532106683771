//! New product wizard handlers.
//!
//! The wizard is one form. Each button posts the current tab's fields plus an
//! `intent` naming what was pressed (`primary`, `cancel`, `tab:N`, `cover:N`,
//! `remove-image:N`, `remove-tag:TAG`, `qty-up`, `qty-down`, `update`).

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    dashboard::{WizardFields, WizardIntent},
    error::AppError,
    state::AppState,
};

use super::orders::schedule_pending_transition;

/// Posted wizard form.
#[derive(Debug, Deserialize)]
pub struct WizardForm {
    pub intent: String,
    #[serde(flatten)]
    pub fields: WizardFields,
}

/// "New Product" button: open a fresh wizard.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> Redirect {
    let mut dashboard = state.dashboard().write().await;
    dashboard.open_new_product();
    schedule_pending_transition(&state, &dashboard);
    Redirect::to("/")
}

/// Any wizard button.
#[instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<WizardForm>,
) -> Result<Redirect, AppError> {
    let intent: WizardIntent = form.intent.parse()?;
    let outcome = state
        .dashboard()
        .write()
        .await
        .apply_wizard_intent(form.fields, intent)?;

    tracing::debug!(?outcome, "wizard intent applied");
    Ok(Redirect::to("/"))
}
