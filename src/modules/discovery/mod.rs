// Discovery module: welcome page and route-table introspection

pub mod controllers;

pub use controllers::discovery_controller::{RouteInfo, ROUTES};
