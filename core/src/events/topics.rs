//! Topic contracts.
//!
//! Every topic published on the bus is declared here together with its
//! payload type, so producers and consumers agree on a checked shape
//! instead of ad-hoc string keys.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published after a product has been hard-deleted. Payload:
/// [`ProductDeleted`].
pub const PRODUCT_DELETED: &str = "productDeleted";

/// Payload for [`PRODUCT_DELETED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDeleted {
    /// Id of the product that no longer exists
    pub product_id: Uuid,
}
