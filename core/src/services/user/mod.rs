//! Account management and login.

mod hasher;
mod service;

pub use hasher::PasswordHasher;
pub use service::{UserPatch, UserService};

#[cfg(test)]
pub use hasher::PlainTextHasher;
