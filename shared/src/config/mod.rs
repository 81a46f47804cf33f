//! Configuration types loaded from the process environment.

mod auth;
mod server;

pub use auth::JwtConfig;
pub use server::ServerConfig;
