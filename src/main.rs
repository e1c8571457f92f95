use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use variant_control::config::Config;
use variant_control::modules::products::repositories::{
    MongoProductRepository, ProductRepository,
};
use variant_control::modules::variants::repositories::{
    MongoVariantRepository, VariantRepository,
};
use variant_control::modules::{discovery, products, variants};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "variant_control=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Variant Control API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Connect to the document store
    let database = config
        .database
        .connect()
        .await
        .context("Failed to connect to the document store")?;

    tracing::info!(
        database = %config.database.database,
        "Document store connection established"
    );

    // Construct repositories and inject them into the handlers
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(MongoProductRepository::new(&database));
    let variant_repo: Arc<dyn VariantRepository> =
        Arc::new(MongoVariantRepository::new(&database));

    let product_data = web::Data::from(product_repo);
    let variant_data = web::Data::from(variant_repo);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(product_data.clone())
            .app_data(variant_data.clone())
            .configure(discovery::controllers::configure)
            .configure(products::controllers::configure)
            .configure(variants::controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
