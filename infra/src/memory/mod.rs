//! In-memory repository implementations.
//!
//! These back the running server in place of a document store. State is a
//! HashMap behind a tokio `RwLock`, shared by cloning the repository's
//! inner `Arc`.

mod inventories;
mod products;
mod users;

pub use inventories::MemoryInventoryRepository;
pub use products::MemoryProductRepository;
pub use users::MemoryUserRepository;
