//! Demo storefront data for the product pane.
//!
//! A static slice of the catalog the filter panel sits beside. The pane
//! only displays these entries; applying the selections to an actual
//! product query is the surrounding application's job.

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    /// Price in cents; money never goes through floats.
    pub price_cents: u32,
    /// Average review rating in tenths of a star (47 = 4.7), if reviewed.
    pub rating_tenths: Option<u8>,
}

impl Product {
    /// Price formatted as `$42.00`.
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// The eight demo products.
pub const DEMO_PRODUCTS: [Product; 8] = [
    Product {
        name: "Floral Midi Dress",
        brand: "Zara",
        category: "Women",
        price_cents: 4200,
        rating_tenths: Some(47),
    },
    Product {
        name: "Casual Denim Jacket",
        brand: "H&M",
        category: "Women",
        price_cents: 5999,
        rating_tenths: Some(40),
    },
    Product {
        name: "Wireless Headphones",
        brand: "Nike",
        category: "Accessories",
        price_cents: 7900,
        rating_tenths: Some(47),
    },
    Product {
        name: "Running Shoes Pro",
        brand: "Nike",
        category: "Shoes",
        price_cents: 8999,
        rating_tenths: Some(40),
    },
    Product {
        name: "Leather Backpack",
        brand: "Gucci",
        category: "Accessories",
        price_cents: 19900,
        rating_tenths: None,
    },
    Product {
        name: "Slim Fit Shirt",
        brand: "H&M",
        category: "Men",
        price_cents: 2999,
        rating_tenths: None,
    },
    Product {
        name: "Sports Sneakers",
        brand: "Adidas",
        category: "Shoes",
        price_cents: 6999,
        rating_tenths: None,
    },
    Product {
        name: "Summer Hat",
        brand: "Zara",
        category: "Accessories",
        price_cents: 2499,
        rating_tenths: None,
    },
];
