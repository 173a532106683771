//! Stockroom Core - Shared record types.
//!
//! This crate provides the record types used by the Stockroom admin dashboard:
//! - `admin` - The dashboard binary and its in-memory controller
//! - `integration-tests` - Router-level tests against the admin library
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! shared state. This keeps it lightweight and usable from tests directly.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, display prices, statuses and the product/order records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
