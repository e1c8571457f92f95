// Variant route handlers
//
// All variant routes are nested under the owning product and pre-check
// that the product exists. Variant existence is not checked on update or
// delete, matching the storage layer's fire-and-forget semantics.

use actix_web::{web, HttpResponse};
use mongodb::bson::{self, doc};
use serde_json::Value;

use crate::core::document;
use crate::core::error::AppError;
use crate::core::response::MessageResponse;
use crate::modules::products::repositories::ProductRepository;
use crate::modules::variants::repositories::VariantRepository;
use crate::modules::variants::validators::{validate_variant_payload, validate_variant_wrapper};

/// Add variants to a product
/// POST /products/{product_id}/variants
///
/// The insert is deliberately not atomic: elements are validated and
/// inserted in order, and a failing element aborts with 422 while earlier
/// inserts remain persisted. The product's `variants` array is only
/// extended once the whole list has succeeded.
pub async fn create_variants(
    product_repo: web::Data<dyn ProductRepository>,
    variant_repo: web::Data<dyn VariantRepository>,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let payload = body.map(web::Json::into_inner);
    let variants = validate_variant_wrapper(payload.as_ref()).map_err(AppError::Validation)?;

    product_repo
        .find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let mut inserted_ids = Vec::with_capacity(variants.len());
    for variant in variants {
        let values =
            validate_variant_payload(variant).map_err(AppError::UnprocessableEntity)?;

        // Only the back-reference and the validated values are persisted;
        // extra fields on the submitted element are dropped.
        let variant = doc! {
            "product_id": &product_id,
            "values": bson::to_bson(&values)?,
        };
        let variant_id = variant_repo.insert(variant).await?;
        inserted_ids.push(variant_id.to_hex());
    }

    if !inserted_ids.is_empty() {
        product_repo
            .push_variant_ids(&product_id, &inserted_ids)
            .await?;
    }

    Ok(HttpResponse::Created().json(MessageResponse::new("Variants added successfully")))
}

/// Update variant details by ID (merge-style)
/// PUT /products/{product_id}/variants/{variant_id}
pub async fn update_variant(
    product_repo: web::Data<dyn ProductRepository>,
    variant_repo: web::Data<dyn VariantRepository>,
    path: web::Path<(String, String)>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, AppError> {
    let (product_id, variant_id) = path.into_inner();
    let payload = body.map(web::Json::into_inner);
    let fields = document::update_document(payload.as_ref())?;

    product_repo
        .find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    variant_repo.update(&variant_id, fields).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Variant updated successfully")))
}

/// Delete a variant by ID. The owning product's `variants` array keeps its
/// reference; readers skip dangling entries.
/// DELETE /products/{product_id}/variants/{variant_id}
pub async fn delete_variant(
    product_repo: web::Data<dyn ProductRepository>,
    variant_repo: web::Data<dyn VariantRepository>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (product_id, variant_id) = path.into_inner();

    product_repo
        .find_by_id(&product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    variant_repo.delete(&variant_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Variant deleted successfully")))
}

/// Configure variant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/products/{product_id}/variants")
            .route(web::post().to(create_variants)),
    )
    .service(
        web::resource("/products/{product_id}/variants/{variant_id}")
            .route(web::put().to(update_variant))
            .route(web::delete().to(delete_variant)),
    );
}
