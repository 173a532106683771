//! Hard-coded sample records the dashboard starts with.

use stockroom_core::{
    DisplayPrice, FulfillmentStatus, Order, OrderId, PaymentStatus, Product, ProductId,
};

/// Image shown when a saved product has no images left.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

struct ProductSeed {
    name: &'static str,
    brand: &'static str,
    stock: u32,
    variants: u32,
    price: &'static str,
    image: &'static str,
    selected: bool,
}

const PRODUCTS: [ProductSeed; 7] = [
    ProductSeed {
        name: "Men AlRiem Jersey Short-Sleeve Polo Shirt",
        brand: "Uniqlo",
        stock: 50,
        variants: 10,
        price: "$14.90",
        image: "/static/img/t1.jfif",
        selected: false,
    },
    ProductSeed {
        name: "© Novoneyra Text Patch T-Shirt",
        brand: "Zara",
        stock: 120,
        variants: 2,
        price: "$35.90",
        image: "/static/img/t2.jfif",
        selected: true,
    },
    ProductSeed {
        name: "T-shirt with Motif",
        brand: "H&M",
        stock: 26,
        variants: 4,
        price: "$7.99",
        image: "/static/img/t3.jfif",
        selected: false,
    },
    ProductSeed {
        name: "Men Dry Pique Short-Sleeve Polo Shirt",
        brand: "Uniqlo",
        stock: 87,
        variants: 6,
        price: "$50.00",
        image: "/static/img/t4.jfif",
        selected: false,
    },
    ProductSeed {
        name: "Apollinaire Text T-Shirt",
        brand: "Zara",
        stock: 96,
        variants: 11,
        price: "$35.90",
        image: "/static/img/t5.jfif",
        selected: true,
    },
    ProductSeed {
        name: "Organic cotton T-shirt",
        brand: "Mango",
        stock: 32,
        variants: 1,
        price: "$15.99",
        image: "/static/img/t6.jfif",
        selected: false,
    },
    ProductSeed {
        name: "T-shirt with Printed Design",
        brand: "H&M",
        stock: 14,
        variants: 5,
        price: "$12.99",
        image: "/static/img/t1.jfif",
        selected: false,
    },
];

pub const FIRST_PRODUCT_CODE: i32 = 10_000;

const ORDERS: [(&str, &str); 7] = [
    ("17 Nov 2020", "Nicolas"),
    ("15 Oct 2020", "Stanley Bryant"),
    ("04 Feb 2020", "Ronald Bennett"),
    ("01 Sep 2020", "Don Lynch"),
    ("18 Mar 2020", "Rosa"),
    ("16 Nov 2020", "Wesley Chambers"),
    ("04 Nov 2020", "Jared Carlson"),
];

const FIRST_ORDER_CODE: i32 = 10_010;

/// The seed product list (ids 1-7, codes 10000-10006).
#[must_use]
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .zip(1..)
        .map(|(seed, n)| Product {
            id: ProductId::new(n),
            name: seed.name.to_string(),
            brand: seed.brand.to_string(),
            code: (FIRST_PRODUCT_CODE + n - 1).to_string(),
            stock: seed.stock,
            variants: seed.variants,
            price: DisplayPrice::new(seed.price),
            image: seed.image.to_string(),
            selected: seed.selected,
        })
        .collect()
}

/// The seed order list (ids 1-7, codes #10010-#10016).
#[must_use]
pub fn orders() -> Vec<Order> {
    ORDERS
        .iter()
        .zip(1..)
        .map(|((date, customer), n)| Order {
            id: OrderId::new(n),
            code: format!("#{}", FIRST_ORDER_CODE + n - 1),
            date: (*date).to_string(),
            customer: (*customer).to_string(),
            payment: PaymentStatus::Paid,
            fulfillment: FulfillmentStatus::Unfulfilled,
            price: DisplayPrice::new("$14.90"),
            selected: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products() {
        let products = products();
        assert_eq!(products.len(), 7);
        assert_eq!(products.first().map(|p| p.code.as_str()), Some("10000"));
        assert_eq!(products.last().map(|p| p.code.as_str()), Some("10006"));
        assert_eq!(products.iter().filter(|p| p.selected).count(), 2);
    }

    #[test]
    fn test_seed_orders() {
        let orders = orders();
        assert_eq!(orders.len(), 7);
        assert_eq!(orders.first().map(|o| o.code.as_str()), Some("#10010"));
        assert_eq!(orders.last().map(|o| o.customer.as_str()), Some("Jared Carlson"));
        assert!(orders.iter().all(|o| !o.selected));
    }
}
