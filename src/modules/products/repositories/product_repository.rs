// ProductRepository: data access for the "products" collection
//
// Documents are stored schemaless; callers insert whatever validated fields
// the client submitted. Updates are merge-style ($set) and report success
// even when the id does not exist, so handlers pre-check existence.

use async_trait::async_trait;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};

use crate::core::document::parse_object_id;
use crate::core::error::{AppError, Result};

/// Data access boundary for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Look up a product by its identifier string
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>>;

    /// Fetch every product in the collection
    async fn find_all(&self) -> Result<Vec<Document>>;

    /// Insert a product document, returning the store-generated identifier
    async fn insert(&self, product: Document) -> Result<ObjectId>;

    /// Merge the given fields into an existing product document
    async fn update(&self, id: &str, fields: Document) -> Result<()>;

    /// Delete a product. Does not cascade to its variants; callers wanting
    /// a cascading policy must layer it on top.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Append variant identifier strings to the product's `variants` array
    async fn push_variant_ids(&self, id: &str, variant_ids: &[String]) -> Result<()>;
}

/// MongoDB-backed product repository
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("products"),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
        let id = parse_object_id(id, "Product")?;
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, product: Document) -> Result<ObjectId> {
        let result = self.collection.insert_one(product).await?;
        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(AppError::internal(format!(
                "store returned a non-ObjectId identifier: {}",
                other
            ))),
        }
    }

    async fn update(&self, id: &str, fields: Document) -> Result<()> {
        let id = parse_object_id(id, "Product")?;
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_object_id(id, "Product")?;
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }

    async fn push_variant_ids(&self, id: &str, variant_ids: &[String]) -> Result<()> {
        let id = parse_object_id(id, "Product")?;
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$push": { "variants": { "$each": variant_ids.to_vec() } } },
            )
            .await?;
        Ok(())
    }
}
