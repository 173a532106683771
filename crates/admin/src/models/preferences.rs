//! Per-visitor navbar preferences.
//!
//! Kept in the session rather than in the shared dashboard, so each browser
//! has its own dark-mode and mobile-menu flags.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Navbar flags stored in the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarPreferences {
    /// Dark color scheme (badges switch to their dark variants).
    pub dark_mode: bool,
    /// Mobile navigation menu expanded.
    pub mobile_menu_open: bool,
}

/// Session keys for admin preferences.
pub mod session_keys {
    /// Key for storing [`NavbarPreferences`](super::NavbarPreferences).
    pub const NAVBAR: &str = "navbar_preferences";
}

impl NavbarPreferences {
    /// Load the preferences from the session, defaulting when absent or unreadable.
    pub async fn load(session: &Session) -> Self {
        session
            .get::<Self>(session_keys::NAVBAR)
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Store the preferences in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(session_keys::NAVBAR, self).await
    }

    #[must_use]
    pub const fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    #[must_use]
    pub const fn toggle_mobile_menu(self) -> Self {
        Self {
            mobile_menu_open: !self.mobile_menu_open,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_independent() {
        let prefs = NavbarPreferences::default().toggle_dark_mode();
        assert!(prefs.dark_mode);
        assert!(!prefs.mobile_menu_open);

        let prefs = prefs.toggle_mobile_menu().toggle_dark_mode();
        assert!(!prefs.dark_mode);
        assert!(prefs.mobile_menu_open);
    }
}
