pub mod auth;
pub mod cors;

pub use auth::{AuthContext, AuthGate};
pub use cors::create_cors;
