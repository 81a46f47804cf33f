//! # StoreFront Infrastructure
//!
//! Concrete implementations of the collaborator contracts defined in
//! `sf_core`: password hashing (bcrypt) and the in-memory stores the
//! server is wired with (the document storage engine proper is an
//! external concern; these stand in behind the same repository traits).

pub mod memory;
pub mod password;

pub use memory::{MemoryInventoryRepository, MemoryProductRepository, MemoryUserRepository};
pub use password::BcryptPasswordHasher;
