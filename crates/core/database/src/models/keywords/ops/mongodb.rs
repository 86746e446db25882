use ::mongodb::bson::{doc, Document};
use ::mongodb::options::FindOptions;
use keywords_result::Result;

use crate::MongoDb;
use crate::{Channel, Keyword};

use super::AbstractKeywords;

static COL: &str = "keywords";

fn filter(username: Option<&str>) -> Document {
    match username {
        Some(username) => doc! {
            "username": username
        },
        None => doc! {},
    }
}

#[async_trait]
impl AbstractKeywords for MongoDb {
    /// Insert new keyword into the database
    async fn insert_keyword(&self, keyword: &Keyword) -> Result<()> {
        self.insert_one(COL, keyword)
            .await
            .map(|_| ())
            .map_err(|error| {
                error!("Failed to insert keyword: {error}");
                create_database_error!("insert_one", COL)
            })
    }

    /// Fetch a keyword by its id
    async fn fetch_keyword(&self, id: &str) -> Result<Keyword> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|error| {
                error!("Failed to fetch keyword {id}: {error}");
                create_database_error!("find_one", COL)
            })?
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a window of keywords in natural (id) order, optionally only for one username
    async fn fetch_keywords(
        &self,
        username: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Keyword>> {
        self.find_with_options(
            COL,
            filter(username),
            FindOptions::builder()
                .sort(doc! {
                    "_id": 1_i32
                })
                .skip(skip)
                .limit(i64::try_from(limit).unwrap_or(i64::MAX))
                .build(),
        )
        .await
        .map_err(|error| {
            error!("Failed to fetch keywords: {error}");
            create_database_error!("find", COL)
        })
    }

    /// Count keywords, optionally only for one username
    async fn count_keywords(&self, username: Option<&str>) -> Result<u64> {
        self.count_documents(COL, filter(username))
            .await
            .map_err(|error| {
                error!("Failed to count keywords: {error}");
                create_database_error!("count", COL)
            })
    }

    /// Replace the channels of a keyword along with its channel count
    async fn update_keyword_channels(
        &self,
        id: &str,
        channels: &[Channel],
        channelcount: &str,
    ) -> Result<()> {
        let channels =
            bson::to_bson(channels).map_err(|_| create_database_error!("to_bson", COL))?;

        let result = self
            .set_one_by_id(
                COL,
                id,
                doc! {
                    "channels": channels,
                    "channelcount": channelcount
                },
            )
            .await
            .map_err(|error| {
                error!("Failed to update keyword {id}: {error}");
                create_database_error!("update_one", COL)
            })?;

        if result.matched_count == 0 {
            Err(create_error!(NotFound))
        } else {
            Ok(())
        }
    }

    /// Delete a keyword from the database
    async fn delete_keyword(&self, id: &str) -> Result<()> {
        let result = self.delete_one_by_id(COL, id).await.map_err(|error| {
            error!("Failed to delete keyword {id}: {error}");
            create_database_error!("delete_one", COL)
        })?;

        if result.deleted_count == 0 {
            Err(create_error!(NotFound))
        } else {
            Ok(())
        }
    }
}
