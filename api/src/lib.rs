// Library exports for testing and external use

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;

pub use error::ApiError;
pub use routes::AppState;
