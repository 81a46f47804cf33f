//! Token issuance and verification.

mod codec;
mod service;

pub use codec::TokenCodec;
pub use service::TokenService;
