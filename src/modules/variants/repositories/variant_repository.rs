// VariantRepository: data access for the "variants" collection
//
// Same semantics as the product repository, scoped to variant documents.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};

use crate::core::document::parse_object_id;
use crate::core::error::{AppError, Result};

/// Data access boundary for variants
#[async_trait]
pub trait VariantRepository: Send + Sync {
    /// Look up a variant by its identifier string
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>>;

    /// Insert a variant document, returning the store-generated identifier
    async fn insert(&self, variant: Document) -> Result<ObjectId>;

    /// Merge the given fields into an existing variant document
    async fn update(&self, id: &str, fields: Document) -> Result<()>;

    /// Delete a variant
    async fn delete(&self, id: &str) -> Result<()>;
}

/// MongoDB-backed variant repository
pub struct MongoVariantRepository {
    collection: Collection<Document>,
}

impl MongoVariantRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("variants"),
        }
    }
}

#[async_trait]
impl VariantRepository for MongoVariantRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
        let id = parse_object_id(id, "Variant")?;
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, variant: Document) -> Result<ObjectId> {
        let result = self.collection.insert_one(variant).await?;
        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(AppError::internal(format!(
                "store returned a non-ObjectId identifier: {}",
                other
            ))),
        }
    }

    async fn update(&self, id: &str, fields: Document) -> Result<()> {
        let id = parse_object_id(id, "Variant")?;
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_object_id(id, "Variant")?;
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
