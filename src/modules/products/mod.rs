// Products module

pub mod controllers;
pub mod repositories;
pub mod validators;

pub use repositories::{MongoProductRepository, ProductRepository};
