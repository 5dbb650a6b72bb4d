//! MongoDB record store
//!
//! Adapter over the `mongodb` driver. The client is created once at boot and
//! pools connections internally; each operation checks a connection out for
//! its own scope. Documents are stored with `_id` holding the hex identifier;
//! this adapter maps the wire-model `id` field to `_id` and back.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::{Client, Collection};

use crate::config::StoreConfig;

use super::error::{StoreError, StoreResult};
use super::record::{Record, RecordId};
use super::RecordStore;

pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Connect to the store named by `config`
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            database: config.database.clone(),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.client.database(&self.database).collection(name)
    }
}

/// Record -> stored document: drop the wire `id`, set `_id` to the hex form
fn to_stored(record: &Record, id: &RecordId) -> StoreResult<Document> {
    let mut document = bson::to_document(record)?;
    document.remove("id");
    document.insert("_id", id.to_hex());
    Ok(document)
}

/// Stored document -> record: surface `_id` as the wire `id` field
fn from_stored(mut document: Document) -> StoreResult<Record> {
    if let Some(id) = document.remove("_id") {
        document.insert("id", id);
    }
    Ok(bson::from_document(document)?)
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn list(&self, collection: &str) -> StoreResult<Vec<Record>> {
        let mut cursor = self.collection(collection).find(doc! {}).await?;
        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(from_stored(document)?);
        }
        Ok(records)
    }

    async fn get(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Record>> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id.to_hex() })
            .await?;
        found.map(from_stored).transpose()
    }

    async fn insert(&self, collection: &str, record: &Record) -> StoreResult<RecordId> {
        let id = RecordId::generate();
        let document = to_stored(record, &id)?;
        self.collection(collection).insert_one(document).await?;
        Ok(id)
    }

    async fn replace(
        &self,
        collection: &str,
        id: &RecordId,
        record: &Record,
    ) -> StoreResult<bool> {
        let document = to_stored(record, id)?;
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id.to_hex() }, document)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn remove(&self, collection: &str, id: &RecordId) -> StoreResult<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id.to_hex() })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
