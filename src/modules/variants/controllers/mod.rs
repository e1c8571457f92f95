pub mod variant_controller;

pub use variant_controller::configure;
