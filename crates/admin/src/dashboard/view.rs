//! View mode, filter-select and sort-select choices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a select option label is not one the dashboard offers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {select} option: {value}")]
pub struct UnknownOption {
    select: &'static str,
    value: String,
}

/// Which table the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Products,
    Orders,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of the "Show:" select.
///
/// Only `Orders` changes what is rendered; the product labels are cosmetic
/// since records carry no draft/active/archived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum FilterChoice {
    #[default]
    AllProducts,
    ActiveProducts,
    DraftProducts,
    ArchivedProducts,
    Orders,
}

impl FilterChoice {
    /// Options in the order the select lists them.
    pub const ALL: [Self; 5] = [
        Self::AllProducts,
        Self::ActiveProducts,
        Self::DraftProducts,
        Self::ArchivedProducts,
        Self::Orders,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllProducts => "All Products",
            Self::ActiveProducts => "Active Products",
            Self::DraftProducts => "Draft Products",
            Self::ArchivedProducts => "Archived Products",
            Self::Orders => "Orders",
        }
    }

    /// The view this option switches to.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Orders => View::Orders,
            _ => View::Products,
        }
    }
}

impl FromStr for FilterChoice {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| UnknownOption {
                select: "filter",
                value: s.to_string(),
            })
    }
}

/// Options of the "Sort by:" select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum SortChoice {
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    StockAsc,
}

impl SortChoice {
    /// Options in the order the select lists them.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::NameAsc,
        Self::NameDesc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::StockAsc,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
            Self::PriceAsc => "Price Low-High",
            Self::PriceDesc => "Price High-Low",
            Self::StockAsc => "Stock Low-High",
        }
    }
}

impl FromStr for SortChoice {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| UnknownOption {
                select: "sort",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_option_selects_orders_view() {
        assert_eq!(FilterChoice::Orders.view(), View::Orders);
    }

    #[test]
    fn test_every_other_option_selects_products_view() {
        for choice in FilterChoice::ALL {
            if choice != FilterChoice::Orders {
                assert_eq!(choice.view(), View::Products, "{}", choice.label());
            }
        }
    }

    #[test]
    fn test_filter_labels_parse() {
        for choice in FilterChoice::ALL {
            assert_eq!(choice.label().parse::<FilterChoice>().unwrap(), choice);
        }
        assert!("orders".parse::<FilterChoice>().is_err());
    }

    #[test]
    fn test_sort_labels_parse() {
        assert_eq!("Name Z-A".parse::<SortChoice>().unwrap(), SortChoice::NameDesc);
        let err = "Newest".parse::<SortChoice>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sort option: Newest");
    }
}
