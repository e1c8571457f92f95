// Discovery endpoints: the welcome page and the route-table listing.
//
// The route table is declared once here and drives both endpoints, so the
// welcome HTML and /routes can never drift apart.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

/// A registered route and the methods it accepts
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub route: &'static str,
    pub methods: &'static [&'static str],
}

/// Every route registered by the service
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        route: "/",
        methods: &["GET"],
    },
    RouteInfo {
        route: "/routes",
        methods: &["GET"],
    },
    RouteInfo {
        route: "/products",
        methods: &["GET", "POST"],
    },
    RouteInfo {
        route: "/products/{product_id}",
        methods: &["GET", "PUT", "DELETE"],
    },
    RouteInfo {
        route: "/products/{product_id}/variants",
        methods: &["POST"],
    },
    RouteInfo {
        route: "/products/{product_id}/variants/{variant_id}",
        methods: &["PUT", "DELETE"],
    },
];

/// Static human-readable description of the API
/// GET /
pub async fn welcome() -> HttpResponse {
    let mut endpoints = String::new();
    for route in ROUTES {
        for method in route.methods {
            endpoints.push_str(&format!("        <li><b>{}</b> {}</li>\n", method, route.route));
        }
    }

    let body = format!(
        "\
    <h1>Welcome to the Variant Control API</h1>
    <p>This API provides endpoints for managing products and their variants.</p>
    <p>Available endpoints:</p>
    <ul>\n{}    </ul>\n",
        endpoints
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Enumerate the registered route table
/// GET /routes
pub async fn list_routes() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "routes": ROUTES }))
}

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/routes", web::get().to(list_routes));
}
