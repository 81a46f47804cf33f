//! Inventory entity.
//!
//! An Inventory record is owned 1:1 by a Product through `product_id` and
//! must never outlive it. The link is repaired eventually, not atomically:
//! the deletion cascade in `events::cascade` converges the two after a
//! product hard-delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock record for a single product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Unique identifier for the inventory record
    pub id: Uuid,

    /// Owning product (unique — one record per product)
    pub product_id: Uuid,

    /// Units on hand, never negative
    pub quantity: u32,

    /// Warehouse location code
    pub location: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Inventory {
    /// Creates a new inventory record for a product
    pub fn new(product_id: Uuid, quantity: u32, location: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            location: location.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds units to stock
    pub fn add(&mut self, units: u32) {
        self.quantity = self.quantity.saturating_add(units);
        self.updated_at = Utc::now();
    }

    /// Removes units from stock; returns false when stock is insufficient
    pub fn remove(&mut self, units: u32) -> bool {
        if units > self.quantity {
            return false;
        }
        self.quantity -= units;
        self.updated_at = Utc::now();
        true
    }
}
