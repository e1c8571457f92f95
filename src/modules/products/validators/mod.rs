pub mod product_validator;

pub use product_validator::validate_product_payload;
