//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, one transaction per request)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (recorded on the span, echoed in the response)
//! 4. Session layer (tower-sessions with the in-memory store)

pub mod request_id;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
