use std::ops::Deref;

use futures::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::Result;
use mongodb::options::FindOptions;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

database_derived!(
    /// MongoDB implementation
    pub struct MongoDb(pub ::mongodb::Client, pub String);
);

impl Deref for MongoDb {
    type Target = mongodb::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MongoDb {
    /// Get the keywords database
    pub fn db(&self) -> mongodb::Database {
        self.database(&self.1)
    }

    /// Get a collection by its name
    pub fn col<T: Send + Sync>(&self, collection: &str) -> mongodb::Collection<T> {
        self.db().collection(collection)
    }

    /// Check that the server is reachable
    pub async fn ping(&self) -> Result<Document> {
        self.db().run_command(doc! { "ping": 1_i32 }).await
    }

    /// Insert one document into a collection
    pub async fn insert_one<T: Serialize + Send + Sync>(
        &self,
        collection: &'static str,
        document: T,
    ) -> Result<InsertOneResult> {
        self.col::<T>(collection).insert_one(document).await
    }

    /// Count documents by projection
    pub async fn count_documents(
        &self,
        collection: &'static str,
        projection: Document,
    ) -> Result<u64> {
        self.col::<Document>(collection)
            .count_documents(projection)
            .await
    }

    /// Find multiple documents in a collection with options
    pub async fn find_with_options<O, T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        projection: Document,
        options: O,
    ) -> Result<Vec<T>>
    where
        O: Into<Option<FindOptions>>,
    {
        Ok(self
            .col::<T>(collection)
            .find(projection)
            .with_options(options)
            .await?
            .filter_map(|s| async move {
                match s {
                    Ok(document) => Some(document),
                    Err(error) => {
                        error!("Skipping invalid document in `{collection}`: {error}");
                        None
                    }
                }
            })
            .collect::<Vec<T>>()
            .await)
    }

    /// Find one document by its ID
    pub async fn find_one_by_id<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<T>> {
        self.col::<T>(collection)
            .find_one(doc! {
                "_id": id
            })
            .await
    }

    /// Set fields on one document given its ID
    pub async fn set_one_by_id(
        &self,
        collection: &'static str,
        id: &str,
        set: Document,
    ) -> Result<UpdateResult> {
        self.col::<Document>(collection)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$set": set
                },
            )
            .await
    }

    /// Delete one document by the given ID
    pub async fn delete_one_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<DeleteResult> {
        self.col::<Document>(collection)
            .delete_one(doc! {
                "_id": id
            })
            .await
    }
}
