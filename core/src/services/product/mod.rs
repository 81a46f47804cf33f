//! Product catalog management.

mod service;

pub use service::{NewProduct, ProductPatch, ProductService};
