//! Business services.

pub mod inventory;
pub mod product;
pub mod token;
pub mod user;

pub use inventory::InventoryService;
pub use product::ProductService;
pub use token::{TokenCodec, TokenService};
pub use user::{PasswordHasher, UserService};
