//! Data table component types.
//!
//! These types describe the two dashboard tables: their columns, the
//! "Show:" and "Sort by:" selects, the per-row menu and the empty state.

use serde::Serialize;

use crate::dashboard::{FilterChoice, SortChoice};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is shown on narrow screens.
    pub mobile: bool,
}

impl TableColumn {
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            mobile: true,
        }
    }

    /// Hide the column on narrow screens.
    #[must_use]
    pub const fn desktop_only(mut self) -> Self {
        self.mobile = false;
        self
    }

    /// Responsive classes shared by the column's header and body cells.
    #[must_use]
    pub const fn visibility_class(&self) -> &'static str {
        if self.mobile { "" } else { " hidden lg:table-cell" }
    }
}

/// Option for a select.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// An option whose posted value is its label.
    #[must_use]
    pub fn labelled(label: &str) -> Self {
        Self::new(label, label)
    }
}

/// A select above the table, posted to `action`.
#[derive(Debug, Clone, Serialize)]
pub struct TableFilter {
    /// Form field name.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Form action the select posts to.
    pub action: String,
    /// Available options.
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    #[must_use]
    pub fn select(label: &str, action: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: "option".to_string(),
            label: label.to_string(),
            action: action.to_string(),
            options,
        }
    }
}

/// Entry in a row's action menu.
#[derive(Debug, Clone, Serialize)]
pub struct RowAction {
    /// Path segment the entry posts to (`/products/{id}/{key}`).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether this is a destructive action.
    pub destructive: bool,
}

impl RowAction {
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            destructive: false,
        }
    }

    /// Mark this action as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Path prefix for row actions.
    pub row_path: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Selects shown above the table.
    pub filters: Vec<TableFilter>,
    /// Row menu entries.
    pub row_actions: Vec<RowAction>,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    #[must_use]
    pub fn new(table_id: &str, row_path: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            row_path: row_path.to_string(),
            columns: vec![],
            filters: vec![],
            row_actions: vec![],
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn row_action(mut self, action: RowAction) -> Self {
        self.row_actions.push(action);
        self
    }

    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }
}

fn show_filter() -> TableFilter {
    TableFilter::select(
        "Show:",
        "/view",
        FilterChoice::ALL
            .iter()
            .map(|choice| FilterOption::labelled(choice.label()))
            .collect(),
    )
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("products", "/products")
        .column(TableColumn::new("name", "Product"))
        .column(TableColumn::new("brand", "Brand").desktop_only())
        .column(TableColumn::new("code", "Product ID").desktop_only())
        .column(TableColumn::new("stock", "Stock"))
        .column(TableColumn::new("variants", "Variants").desktop_only())
        .column(TableColumn::new("price", "Price"))
        .filter(show_filter())
        .filter(TableFilter::select(
            "Sort by:",
            "/sort",
            SortChoice::ALL
                .iter()
                .map(|sort| FilterOption::labelled(sort.label()))
                .collect(),
        ))
        .row_action(RowAction::new("edit", "Edit"))
        .row_action(RowAction::new("duplicate", "Duplicate"))
        .row_action(RowAction::new("delete", "Delete").destructive())
        .empty_state("No products found", Some("Try adjusting your search"))
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders", "/orders")
        .column(TableColumn::new("code", "Order"))
        .column(TableColumn::new("date", "Date"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("payment", "Payment"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("price", "Price"))
        .filter(show_filter())
        .row_action(RowAction::new("details", "View Details"))
        .empty_state("No orders found", Some("Try adjusting your search"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_config() {
        let config = products_table_config();
        assert_eq!(config.columns.len(), 6);
        assert_eq!(config.filters.len(), 2);
        let show: Vec<&str> = config
            .filters
            .first()
            .map(|f| f.options.iter().map(|o| o.label.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(
            show,
            vec!["All Products", "Active Products", "Draft Products", "Archived Products", "Orders"]
        );
        assert!(config.row_actions.iter().any(|a| a.key == "delete" && a.destructive));
    }

    #[test]
    fn test_visibility_class() {
        let config = products_table_config();
        let hidden: Vec<&str> = config
            .columns
            .iter()
            .filter(|c| !c.visibility_class().is_empty())
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(hidden, vec!["brand", "code", "variants"]);
        assert!(
            orders_table_config()
                .columns
                .iter()
                .all(|c| c.visibility_class().is_empty())
        );
    }

    #[test]
    fn test_orders_config() {
        let config = orders_table_config();
        assert_eq!(config.columns.len(), 6);
        assert_eq!(config.filters.len(), 1);
        assert_eq!(config.row_actions.first().map(|a| a.label.as_str()), Some("View Details"));
    }
}
