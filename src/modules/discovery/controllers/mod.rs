pub mod discovery_controller;

pub use discovery_controller::configure;
