//! Reusable view components.

pub mod badge;
pub mod data_table;

pub use badge::{BadgeTheme, fulfillment_badge_class, payment_badge_class};
pub use data_table::{DataTableConfig, orders_table_config, products_table_config};
