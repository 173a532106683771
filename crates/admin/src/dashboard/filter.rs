//! Search filtering and sorting of the derived table views.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use stockroom_core::{Product, Searchable};

use super::view::SortChoice;

/// Records whose searchable fields contain `query`, ignoring case, in list order.
///
/// An empty query returns every record.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect()
}

/// Sort a filtered product view in place.
///
/// The sort is stable, so `Default` and ties keep list order.
pub fn sort_products(products: &mut [&Product], sort: SortChoice) {
    match sort {
        SortChoice::Default => {}
        SortChoice::NameAsc => products.sort_by(|a, b| compare_names(a, b)),
        SortChoice::NameDesc => products.sort_by(|a, b| compare_names(b, a)),
        SortChoice::PriceAsc => {
            products.sort_by(|a, b| compare_prices(a.price.amount(), b.price.amount(), false));
        }
        SortChoice::PriceDesc => {
            products.sort_by(|a, b| compare_prices(a.price.amount(), b.price.amount(), true));
        }
        SortChoice::StockAsc => products.sort_by_key(|p| p.stock),
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Unreadable prices go last in either direction.
fn compare_prices(a: Option<Decimal>, b: Option<Decimal>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use stockroom_core::DisplayPrice;

    use super::*;
    use crate::dashboard::seed;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let products = seed::products();
        let filtered = filter_records(&products, "");
        assert_eq!(filtered.len(), products.len());
        assert!(filtered.iter().zip(&products).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_filter_by_brand() {
        let products = seed::products();
        let filtered = filter_records(&products, "Zara");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.brand == "Zara"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let products = seed::products();
        assert_eq!(
            filter_records(&products, "polo shirt").len(),
            filter_records(&products, "POLO SHIRT").len()
        );
    }

    #[test]
    fn test_filter_no_match() {
        let products = seed::products();
        assert!(filter_records(&products, "99999").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = seed::products();
        let orders = seed::orders();
        for query in ["", "t-shirt", "Uniqlo", "1000", "nov", "#10013", "zzz"] {
            let once: Vec<Product> = filter_records(&products, query)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_records(&once, query);
            assert_eq!(twice.len(), once.len(), "products: {query}");

            let once: Vec<_> = filter_records(&orders, query)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_records(&once, query);
            assert_eq!(twice.len(), once.len(), "orders: {query}");
        }
    }

    #[test]
    fn test_filter_orders_by_date() {
        let orders = seed::orders();
        let filtered = filter_records(&orders, "nov 2020");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_sort_by_name() {
        let products = seed::products();
        let mut view = filter_records(&products, "");
        sort_products(&mut view, SortChoice::NameAsc);
        assert_eq!(view.first().map(|p| p.name.as_str()), Some("Apollinaire Text T-Shirt"));
        assert_eq!(view.last().map(|p| p.name.as_str()), Some("© Novoneyra Text Patch T-Shirt"));
        sort_products(&mut view, SortChoice::NameDesc);
        assert_eq!(view.get(1).map(|p| p.name.as_str()), Some("T-shirt with Printed Design"));
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let products = seed::products();
        let mut view = filter_records(&products, "");
        sort_products(&mut view, SortChoice::PriceDesc);
        let sorted = names(&view);
        assert_eq!(sorted.first().map(String::as_str), Some("Men Dry Pique Short-Sleeve Polo Shirt"));
        // Both $35.90 products keep their list order.
        let novoneyra = sorted.iter().position(|n| n.contains("Novoneyra"));
        let apollinaire = sorted.iter().position(|n| n.contains("Apollinaire"));
        assert!(novoneyra < apollinaire);
    }

    #[test]
    fn test_sort_unreadable_price_last() {
        let mut products = seed::products();
        if let Some(first) = products.first_mut() {
            first.price = DisplayPrice::new("$abc");
        }
        for sort in [SortChoice::PriceAsc, SortChoice::PriceDesc] {
            let mut view = filter_records(&products, "");
            sort_products(&mut view, sort);
            assert_eq!(view.last().map(|p| p.price.as_str()), Some("$abc"));
        }
    }

    #[test]
    fn test_sort_by_stock() {
        let products = seed::products();
        let mut view = filter_records(&products, "");
        sort_products(&mut view, SortChoice::StockAsc);
        let stocks: Vec<u32> = view.iter().map(|p| p.stock).collect();
        assert_eq!(stocks, vec![14, 26, 32, 50, 87, 96, 120]);
    }
}
