//! Navbar preference API.

use axum::Json;
use tower_sessions::Session;
use tracing::instrument;

use crate::{error::AppError, models::NavbarPreferences};

/// Flip dark mode for this visitor and return the new preferences.
#[instrument(skip(session))]
pub async fn toggle_dark_mode(session: Session) -> Result<Json<NavbarPreferences>, AppError> {
    let prefs = NavbarPreferences::load(&session).await.toggle_dark_mode();
    prefs.save(&session).await?;
    tracing::debug!(dark_mode = prefs.dark_mode, "dark mode toggled");
    Ok(Json(prefs))
}
