use std::env;

use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::core::Result;

/// Connection settings for the MongoDB document store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
            database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "var_control_db".to_string()),
        })
    }

    /// Connect to the document store and verify the server is reachable
    pub async fn connect(&self) -> Result<Database> {
        let client = Client::with_uri_str(&self.uri).await?;
        let database = client.database(&self.database);

        // The driver connects lazily; ping so startup fails loudly when the
        // store is unreachable instead of on the first request.
        database.run_command(doc! { "ping": 1 }).await?;

        Ok(database)
    }
}
