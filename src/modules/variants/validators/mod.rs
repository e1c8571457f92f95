pub mod variant_validator;

pub use variant_validator::{validate_variant_payload, validate_variant_wrapper};
