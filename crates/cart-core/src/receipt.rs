//! # Checkout Receipts
//!
//! Record of a finished checkout.

use crate::error::CartResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// User who checked out
    pub user_id: u64,

    /// Number of cart entries at checkout
    pub item_count: usize,

    /// Total before discount
    pub subtotal: f64,

    /// Amount charged
    pub total: f64,

    /// Description of the applied discount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a receipt with a generated ID
    pub fn new(user_id: u64, item_count: usize, subtotal: f64, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            item_count,
            subtotal,
            total,
            discount: None,
            created_at: Utc::now(),
        }
    }

    /// Builder: record the applied discount
    pub fn with_discount(mut self, description: impl Into<String>) -> Self {
        self.discount = Some(description.into());
        self
    }

    /// Amount taken off by the discount (negative for inflating discounts)
    pub fn savings(&self) -> f64 {
        self.subtotal - self.total
    }

    /// Check if the cart was empty at checkout
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
