//! Shared utilities and common types for the StoreFront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelopes and the serialized error shape
//! - Pagination types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{JwtConfig, ServerConfig};
pub use types::{ApiResponse, ErrorBody, ErrorMessage, Page, Pagination};
