pub mod variant_repository;

pub use variant_repository::{MongoVariantRepository, VariantRepository};
