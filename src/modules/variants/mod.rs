// Variants module

pub mod controllers;
pub mod repositories;
pub mod validators;

pub use repositories::{MongoVariantRepository, VariantRepository};
