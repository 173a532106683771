//! Session-stored models for admin.

pub mod preferences;

pub use preferences::{NavbarPreferences, session_keys};
