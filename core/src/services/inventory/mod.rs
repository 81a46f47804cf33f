//! Stock management.

mod service;

pub use service::{InventoryService, NewInventory};
