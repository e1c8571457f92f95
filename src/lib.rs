//! Variant Control API Library
//!
//! This library provides the request, validation, and persistence layers for
//! the Variant Control product catalog service.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used modules
pub use modules::discovery;
pub use modules::products;
pub use modules::variants;
