//! # Product Types
//!
//! Products held in carts. A product is plain data: identity, price and a
//! mutable quantity, plus kind-specific fields for digital and physical
//! goods. Products can also be loaded from a TOML catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind-specific product data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    /// Plain product with no extra fields
    #[default]
    Generic,
    /// Downloadable product
    Digital {
        file_size: String,
        download_link: String,
    },
    /// Shipped product
    Physical {
        weight: String,
        manufacturer: String,
    },
}

/// A product placed in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned identifier; not checked for uniqueness
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Quantity (negative values are accepted)
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Product kind
    #[serde(default)]
    pub kind: ProductKind,
}

fn default_quantity() -> i64 {
    1
}

impl Product {
    /// Create a generic product
    pub fn new(id: u64, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            kind: ProductKind::Generic,
        }
    }

    /// Create a digital product
    pub fn digital(
        id: u64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        file_size: impl Into<String>,
        download_link: impl Into<String>,
    ) -> Self {
        Self {
            kind: ProductKind::Digital {
                file_size: file_size.into(),
                download_link: download_link.into(),
            },
            ..Self::new(id, name, price, quantity)
        }
    }

    /// Create a physical product
    pub fn physical(
        id: u64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        weight: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            kind: ProductKind::Physical {
                weight: weight.into(),
                manufacturer: manufacturer.into(),
            },
            ..Self::new(id, name, price, quantity)
        }
    }

    /// Replace the quantity. No bounds are checked.
    pub fn update_quantity(&mut self, new_quantity: i64) {
        self.quantity = new_quantity;
    }

    /// Human-readable summary, extended with kind-specific fields
    pub fn get_product_info(&self) -> String {
        let base = format!(
            "Product ID: {}, Name: {}, Price: {}, Quantity: {}",
            self.id, self.name, self.price, self.quantity
        );

        match &self.kind {
            ProductKind::Generic => base,
            ProductKind::Digital {
                file_size,
                download_link,
            } => format!(
                "{}, File Size: {}, Download Link: {}",
                base, file_size, download_link
            ),
            ProductKind::Physical {
                weight,
                manufacturer,
            } => format!("{}, Weight: {}, Manufacturer: {}", base, weight, manufacturer),
        }
    }

    /// Check if this is a digital product
    pub fn is_digital(&self) -> bool {
        matches!(self.kind, ProductKind::Digital { .. })
    }

    /// Check if this is a physical product
    pub fn is_physical(&self) -> bool {
        matches!(self.kind, ProductKind::Physical { .. })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_product_info())
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find the first product with the given id
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
