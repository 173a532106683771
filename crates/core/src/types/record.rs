//! Product and order records.

use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::price::DisplayPrice;
use super::search::Searchable;
use super::status::{FulfillmentStatus, PaymentStatus};

/// A product row in the catalog table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the in-memory list.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand label.
    pub brand: String,
    /// Product code (SKU).
    pub code: String,
    /// Units in stock.
    pub stock: u32,
    /// Number of variants.
    pub variants: u32,
    /// Price as displayed.
    pub price: DisplayPrice,
    /// Image path.
    pub image: String,
    /// Whether the row is checked in the table.
    pub selected: bool,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.brand.as_str(), self.code.as_str()]
    }
}

/// An order row in the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique within the in-memory list.
    pub id: OrderId,
    /// Order code (e.g. `#10010`).
    pub code: String,
    /// Display date, never parsed.
    pub date: String,
    /// Customer name.
    pub customer: String,
    /// Payment status.
    pub payment: PaymentStatus,
    /// Fulfillment status.
    pub fulfillment: FulfillmentStatus,
    /// Price as displayed.
    pub price: DisplayPrice,
    /// Whether the row is checked in the table.
    pub selected: bool,
}

impl Order {
    /// The order code with everything but digits stripped (`#10010` -> `10010`).
    #[must_use]
    pub fn code_digits(&self) -> String {
        self.code.chars().filter(char::is_ascii_digit).collect()
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.customer.as_str(), self.date.as_str()]
    }
}
