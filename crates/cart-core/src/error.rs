//! # Cart Error Types
//!
//! Typed error handling for cart-rs.
//! The lenient operations never fail; the strict and validating
//! variants return `Result<T, CartError>`.

use thiserror::Error;

/// Core error type for cart operations
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Strict removal found no item with the given id
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: u64 },

    /// Negative or non-finite price rejected by the cart policy
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: u64, price: f64 },

    /// Negative quantity rejected by the cart policy
    #[error("Invalid quantity for product {product_id}: {quantity}")]
    InvalidQuantity { product_id: u64, quantity: i64 },

    /// Discount parameter outside the accepted range
    #[error("Invalid discount: {message}")]
    InvalidDiscount { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CartError {
    /// Returns true if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CartError::InvalidPrice { .. }
                | CartError::InvalidQuantity { .. }
                | CartError::InvalidDiscount { .. }
        )
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        assert!(CartError::InvalidPrice {
            product_id: 1,
            price: -5.0
        }
        .is_validation());
        assert!(CartError::InvalidDiscount {
            message: "percentage above 100".into()
        }
        .is_validation());
        assert!(!CartError::ProductNotFound { product_id: 7 }.is_validation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CartError::ProductNotFound { product_id: 42 }.to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CartError::InvalidQuantity {
                product_id: 3,
                quantity: -2
            }
            .to_string(),
            "Invalid quantity for product 3: -2"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cart_err: CartError = err.into();
        assert!(matches!(cart_err, CartError::Serialization(_)));
    }
}
