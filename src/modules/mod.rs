pub mod discovery;
pub mod products;
pub mod variants;
