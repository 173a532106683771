//! Core types for Stockroom.
//!
//! This module provides type-safe wrappers and the two record shapes the
//! dashboard works with.

pub mod id;
pub mod price;
pub mod record;
pub mod search;
pub mod status;

pub use id::*;
pub use price::DisplayPrice;
pub use record::{Order, Product};
pub use search::Searchable;
pub use status::*;
