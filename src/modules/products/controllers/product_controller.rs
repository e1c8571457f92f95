// Product route handlers
//
// Each handler orchestrates validation, data access, and response shaping.
// Bodies are extracted as Option<web::Json<Value>> so an absent or
// unparseable body reaches the validators as "missing" instead of being
// rejected by the framework with its own envelope.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::core::document;
use crate::core::error::AppError;
use crate::core::response::MessageResponse;
use crate::modules::products::repositories::ProductRepository;
use crate::modules::products::validators::validate_product_payload;
use crate::modules::variants::repositories::VariantRepository;

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product_id: String,
}

/// Add a new product
/// POST /products
pub async fn create_product(
    repo: web::Data<dyn ProductRepository>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = body.map(web::Json::into_inner);
    let fields = validate_product_payload(payload.as_ref()).map_err(AppError::Validation)?;

    let product = document::to_document(fields)?;
    let product_id = repo.insert(product).await?;

    Ok(HttpResponse::Created().json(ProductCreatedResponse {
        message: "Product added successfully".to_string(),
        product_id: product_id.to_hex(),
    }))
}

/// Get product details by ID, with its variant references resolved into the
/// full variant documents
/// GET /products/{product_id}
pub async fn get_product(
    product_repo: web::Data<dyn ProductRepository>,
    variant_repo: web::Data<dyn VariantRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = product_repo
        .find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    // Resolve variant references. Corrupt or dangling references are
    // skipped rather than failing the whole read.
    let references: Vec<String> = product
        .get_array("variants")
        .map(|refs| {
            refs.iter()
                .filter_map(|entry| entry.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default();

    let mut resolved = Vec::with_capacity(references.len());
    for reference in &references {
        let variant = match variant_repo.find_by_id(reference).await {
            Ok(found) => found,
            Err(AppError::InvalidIdentifier { .. }) => None,
            Err(err) => return Err(err),
        };
        if let Some(variant) = variant {
            resolved.push(document::to_json(variant));
        }
    }

    let mut body = document::to_json(product);
    if let Some(fields) = body.as_object_mut() {
        fields.insert("variants".to_string(), Value::Array(resolved));
    }

    Ok(HttpResponse::Ok().json(body))
}

/// Update product details by ID (merge-style: only submitted fields change)
/// PUT /products/{product_id}
pub async fn update_product(
    repo: web::Data<dyn ProductRepository>,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let payload = body.map(web::Json::into_inner);
    let fields = document::update_document(payload.as_ref())?;

    repo.find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    repo.update(&product_id, fields).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Product updated successfully")))
}

/// Retrieve all products
/// GET /products
pub async fn list_products(
    repo: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, AppError> {
    let products = repo.find_all().await?;
    if products.is_empty() {
        return Err(AppError::not_found("No products found"));
    }

    let body: Vec<Value> = products.into_iter().map(document::to_json).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// Delete a product by ID. Its variants are left in place.
/// DELETE /products/{product_id}
pub async fn delete_product(
    repo: web::Data<dyn ProductRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    repo.find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    repo.delete(&product_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Product deleted successfully")))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/products")
            .route(web::get().to(list_products))
            .route(web::post().to(create_product)),
    )
    .service(
        web::resource("/products/{product_id}")
            .route(web::get().to(get_product))
            .route(web::put().to(update_product))
            .route(web::delete().to(delete_product)),
    );
}
