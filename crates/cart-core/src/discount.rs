//! # Discount Strategies
//!
//! Strategy pattern for discounts applied at checkout. A discount is a pure
//! function from a cart total to an adjusted total; it never sees the cart.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │      DiscountStrategy (trait)        │
//! │  ├── apply_discount()                │
//! │  ├── kind()                          │
//! │  └── describe()                      │
//! └──────────────────────────────────────┘
//!                    ▲
//!          ┌─────────┴──────────┐
//!  ┌───────┴────────┐ ┌─────────┴───────────┐
//!  │PercentDiscount │ │ FixedAmountDiscount │
//!  └────────────────┘ └─────────────────────┘
//! ```

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Core trait for discount implementations.
pub trait DiscountStrategy: Send + Sync {
    /// Map a total to the discounted total. Must be pure.
    fn apply_discount(&self, total: f64) -> f64;

    /// Short discount kind (for logging and receipts).
    fn kind(&self) -> &'static str;

    /// Human-readable description including the parameter.
    fn describe(&self) -> String {
        self.kind().to_string()
    }
}

/// Type alias for a shared discount strategy (dynamic dispatch)
pub type BoxedDiscount = Arc<dyn DiscountStrategy>;

/// Percentage off the total.
///
/// No bounds are enforced by `new`: a percentage above 100 yields a negative
/// total and a negative percentage inflates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentDiscount {
    percentage: f64,
}

impl PercentDiscount {
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    /// Create a discount, rejecting percentages outside `[0, 100]`
    pub fn checked(percentage: f64) -> CartResult<Self> {
        if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
            return Err(CartError::InvalidDiscount {
                message: format!("percentage must be within 0..=100, got {}", percentage),
            });
        }
        Ok(Self::new(percentage))
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl DiscountStrategy for PercentDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        total * (1.0 - self.percentage / 100.0)
    }

    fn kind(&self) -> &'static str {
        "percent"
    }

    fn describe(&self) -> String {
        format!("{}% off", self.percentage)
    }
}

/// Fixed amount off the total, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmountDiscount {
    amount: f64,
}

impl FixedAmountDiscount {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Create a discount, rejecting negative or non-finite amounts
    pub fn checked(amount: f64) -> CartResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CartError::InvalidDiscount {
                message: format!("amount must be a non-negative number, got {}", amount),
            });
        }
        Ok(Self::new(amount))
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl DiscountStrategy for FixedAmountDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        let discounted = total - self.amount;
        if discounted < 0.0 {
            return 0.0;
        }
        discounted
    }

    fn kind(&self) -> &'static str {
        "fixed_amount"
    }

    fn describe(&self) -> String {
        format!("{} off", self.amount)
    }
}

/// Serializable description of a discount (used in config files)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountSpec {
    Percent { percentage: f64 },
    FixedAmount { amount: f64 },
}

impl DiscountSpec {
    /// Build the strategy, validating its parameter
    pub fn build(&self) -> CartResult<BoxedDiscount> {
        Ok(match *self {
            DiscountSpec::Percent { percentage } => Arc::new(PercentDiscount::checked(percentage)?),
            DiscountSpec::FixedAmount { amount } => Arc::new(FixedAmountDiscount::checked(amount)?),
        })
    }
}

/// A coupon code bound to a discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponSpec {
    pub code: String,
    pub discount: DiscountSpec,
}

/// Registry of discounts keyed by coupon code
#[derive(Clone, Default)]
pub struct DiscountRegistry {
    discounts: HashMap<String, BoxedDiscount>,
}

impl DiscountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            discounts: HashMap::new(),
        }
    }

    /// Build a registry from coupon specs, validating each discount
    pub fn from_specs(specs: &[CouponSpec]) -> CartResult<Self> {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec.code.clone(), spec.discount.build()?);
        }
        Ok(registry)
    }

    /// Register a discount under a coupon code, replacing any previous one
    pub fn register(&mut self, code: impl Into<String>, discount: BoxedDiscount) {
        self.discounts.insert(code.into(), discount);
    }

    /// Register with builder pattern
    pub fn with_discount(mut self, code: impl Into<String>, discount: BoxedDiscount) -> Self {
        self.register(code, discount);
        self
    }

    /// Get a discount by coupon code
    pub fn get(&self, code: &str) -> Option<&BoxedDiscount> {
        self.discounts.get(code)
    }

    /// List registered coupon codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.discounts.keys().map(|s| s.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    /// Check if a coupon code is registered
    pub fn has_code(&self, code: &str) -> bool {
        self.discounts.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_discount() {
        let discount = PercentDiscount::new(10.0);
        assert_eq!(discount.apply_discount(200.0), 180.0);
        assert_eq!(discount.apply_discount(0.0), 0.0);
        assert_eq!(discount.describe(), "10% off");
    }

    #[test]
    fn test_percent_discount_out_of_range() {
        for (p, total) in [(150.0, 200.0), (-20.0, 200.0), (33.3, 17.25)] {
            let discount = PercentDiscount::new(p);
            assert_eq!(discount.apply_discount(total), total * (1.0 - p / 100.0));
        }
        assert!(PercentDiscount::new(150.0).apply_discount(200.0) < 0.0);
        assert!(PercentDiscount::new(-20.0).apply_discount(200.0) > 200.0);
    }

    #[test]
    fn test_fixed_amount_discount() {
        let discount = FixedAmountDiscount::new(10.0);
        assert_eq!(discount.apply_discount(200.0), 190.0);
        assert_eq!(discount.apply_discount(10.0), 0.0);
        assert_eq!(FixedAmountDiscount::new(250.0).apply_discount(200.0), 0.0);
    }

    #[test]
    fn test_fixed_amount_never_negative() {
        for amount in [0.0, 0.5, 99.0, 100.0, 1e9] {
            for total in [0.0, 1.0, 100.0, 1234.5] {
                let result = FixedAmountDiscount::new(amount).apply_discount(total);
                assert!(result >= 0.0);
                if total >= amount {
                    assert_eq!(result, total - amount);
                }
            }
        }
    }

    #[test]
    fn test_checked_constructors() {
        assert!(PercentDiscount::checked(100.0).is_ok());
        assert!(PercentDiscount::checked(100.1).is_err());
        assert!(PercentDiscount::checked(f64::NAN).is_err());
        assert!(FixedAmountDiscount::checked(0.0).is_ok());
        assert!(matches!(
            FixedAmountDiscount::checked(-1.0),
            Err(CartError::InvalidDiscount { .. })
        ));
    }

    #[test]
    fn test_spec_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            discounts: Vec<CouponSpec>,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            [[discounts]]
            code = "SAVE10"
            discount = { kind = "percent", percentage = 10.0 }

            [[discounts]]
            code = "TENOFF"
            discount = { kind = "fixed_amount", amount = 10.0 }
            "#,
        )
        .unwrap();

        let registry = DiscountRegistry::from_specs(&wrapper.discounts).unwrap();
        assert_eq!(registry.codes(), vec!["SAVE10", "TENOFF"]);

        let save10 = registry.get("SAVE10").unwrap();
        assert_eq!(save10.kind(), "percent");
        assert_eq!(save10.apply_discount(200.0), 180.0);
        assert_eq!(registry.get("TENOFF").unwrap().apply_discount(200.0), 190.0);
    }

    #[test]
    fn test_registry_rejects_invalid_spec() {
        let specs = vec![CouponSpec {
            code: "BROKEN".into(),
            discount: DiscountSpec::Percent { percentage: 250.0 },
        }];
        assert!(matches!(
            DiscountRegistry::from_specs(&specs),
            Err(CartError::InvalidDiscount { .. })
        ));
        assert!(specs[0].discount.build().is_err());

        // The unchecked constructor keeps the raw behavior
        assert_eq!(PercentDiscount::new(250.0).apply_discount(100.0), -150.0);
    }

    #[test]
    fn test_registry_builder() {
        let registry = DiscountRegistry::new()
            .with_discount("HALF", Arc::new(PercentDiscount::new(50.0)))
            .with_discount("FIVE", Arc::new(FixedAmountDiscount::new(5.0)));

        assert_eq!(registry.len(), 2);
        assert!(registry.has_code("HALF"));
        assert!(!registry.has_code("half"));
        assert!(registry.get("NOPE").is_none());
    }
}
