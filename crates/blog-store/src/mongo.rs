use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::MongoConfig;
use crate::document::{encode, BlogDocument, BlogFields, IdFilter, SetFields};
use crate::error::{StoreError, StoreResult};
use crate::mapper::{decode_document, encode_id, NativeId};
use crate::traits::BlogStore;

/// Blog store backed by a MongoDB collection.
///
/// The driver's client is internally pooled and safe to share, so the store
/// holds no locks of its own.
#[derive(Clone)]
pub struct MongoBlogStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoBlogStore {
    /// Connect and verify the deployment answers a `ping`.
    pub async fn connect(config: &MongoConfig) -> StoreResult<Self> {
        info!(uri = %config.uri, "connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(format!("invalid MongoDB uri: {e}")))?;
        options.app_name = config.app_name.clone();

        let client = Client::with_options(options)
            .map_err(|e| StoreError::Connection(format!("cannot create MongoDB client: {e}")))?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(format!("MongoDB ping failed: {e}")))?;

        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to MongoDB"
        );
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl BlogStore for MongoBlogStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn insert(&self, document: &BlogDocument) -> StoreResult<NativeId> {
        let raw = encode(document).map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let result = self
            .collection
            .insert_one(raw)
            .await
            .map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::WriteFailure(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;
        debug!(id = %encode_id(&id), "inserted blog");
        Ok(id)
    }

    async fn find_by_id(&self, id: &NativeId) -> StoreResult<BlogDocument> {
        let filter =
            encode(&IdFilter::new(*id)).map_err(|e| StoreError::ReadFailure(e.to_string()))?;
        let raw = self
            .collection
            .find_one(filter)
            .await
            .map_err(|e| StoreError::ReadFailure(e.to_string()))?
            .ok_or_else(|| StoreError::NotFound(encode_id(id)))?;
        decode_document(raw, id)
    }

    async fn update_by_id(&self, id: &NativeId, fields: &BlogFields) -> StoreResult<()> {
        let filter =
            encode(&IdFilter::new(*id)).map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let update = encode(&SetFields::new(fields))
            .map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let result = self
            .collection
            .update_one(filter, update)
            .await
            .map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        if result.matched_count == 0 {
            return Err(StoreError::NotFound(encode_id(id)));
        }
        debug!(id = %encode_id(id), modified = result.modified_count, "updated blog");
        Ok(())
    }

    async fn delete_by_id(&self, id: &NativeId) -> StoreResult<()> {
        let filter =
            encode(&IdFilter::new(*id)).map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound(encode_id(id)));
        }
        debug!(id = %encode_id(id), "deleted blog");
        Ok(())
    }

    async fn close(&self) -> StoreResult<()> {
        info!("closing MongoDB connection");
        self.client.clone().shutdown().await;
        Ok(())
    }
}

impl std::fmt::Debug for MongoBlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoBlogStore")
            .field("namespace", &self.collection.namespace().to_string())
            .finish()
    }
}
