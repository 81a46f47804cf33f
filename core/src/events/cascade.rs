//! Product-deletion cascade.
//!
//! Consumes [`topics::PRODUCT_DELETED`] and drives the orphaned Inventory
//! record to deletion. The cascade is not transactional with the product
//! delete: until this handler has run, a deleted product may briefly leave
//! an inventory record behind. The system guarantees convergence, not
//! atomicity.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{DomainError, RepositoryError};
use crate::events::bus::{DomainEvent, EventHandler};
use crate::events::topics::ProductDeleted;
use crate::repositories::InventoryRepository;

/// Bounded retry with fixed backoff.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts before the cascade is abandoned
    pub max_attempts: u32,

    /// Sleep between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Deletes the Inventory record of a deleted Product, retrying transient
/// storage failures.
///
/// A missing record is *not* retried: it means the invariant already holds
/// (the record never existed or someone else deleted it), so the handler
/// reports convergence instead of burning the attempt budget. Only
/// transient failures (`RepositoryError::Unavailable` and the like) sleep
/// and retry. After `max_attempts` the cascade gives up with a warning;
/// no caller is ever handed the error — the triggering request may long be
/// finished.
pub struct ProductDeletedHandler<I: InventoryRepository> {
    inventories: Arc<I>,
    policy: RetryPolicy,
}

impl<I: InventoryRepository> ProductDeletedHandler<I> {
    pub fn new(inventories: Arc<I>, policy: RetryPolicy) -> Self {
        Self {
            inventories,
            policy,
        }
    }

    async fn cascade(&self, product_id: Uuid) {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.delete_inventory(product_id).await {
                Ok(Some(inventory_id)) => {
                    tracing::info!(%product_id, %inventory_id, "inventory cascade completed");
                    return;
                }
                Ok(None) => {
                    tracing::debug!(%product_id, "no inventory record to cascade");
                    return;
                }
                Err(error) => {
                    if attempt >= self.policy.max_attempts {
                        tracing::warn!(
                            %product_id,
                            attempt,
                            %error,
                            "abandoning inventory cascade"
                        );
                        return;
                    }
                    tokio::time::sleep(self.policy.delay).await;
                }
            }
        }
    }

    /// One deletion attempt. `Ok(None)` means there is nothing left to
    /// delete.
    async fn delete_inventory(&self, product_id: Uuid) -> Result<Option<Uuid>, RepositoryError> {
        let inventory = match self.inventories.find_by_product(product_id).await? {
            Some(inventory) => inventory,
            None => return Ok(None),
        };

        match self.inventories.delete(inventory.id).await {
            Ok(()) => Ok(Some(inventory.id)),
            // Lost a race with another deletion; converged all the same.
            Err(RepositoryError::NotFound { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

#[async_trait]
impl<I: InventoryRepository + 'static> EventHandler for ProductDeletedHandler<I> {
    fn name(&self) -> &'static str {
        "inventory-cascade"
    }

    async fn handle(&self, event: DomainEvent) -> Result<(), DomainError> {
        let payload: ProductDeleted = serde_json::from_value(event.payload).map_err(|error| {
            DomainError::internal(format!("malformed productDeleted payload: {error}"))
        })?;

        self.cascade(payload.product_id).await;
        Ok(())
    }
}
