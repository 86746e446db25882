use keywords_result::Result;

use crate::{Channel, Keyword};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractKeywords: Sync + Send {
    /// Insert new keyword into the database
    async fn insert_keyword(&self, keyword: &Keyword) -> Result<()>;

    /// Fetch a keyword by its id
    async fn fetch_keyword(&self, id: &str) -> Result<Keyword>;

    /// Fetch a window of keywords in natural (id) order, optionally only for one username
    async fn fetch_keywords(
        &self,
        username: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Keyword>>;

    /// Count keywords, optionally only for one username
    async fn count_keywords(&self, username: Option<&str>) -> Result<u64>;

    /// Replace the channels of a keyword along with its channel count
    async fn update_keyword_channels(
        &self,
        id: &str,
        channels: &[Channel],
        channelcount: &str,
    ) -> Result<()>;

    /// Delete a keyword from the database
    async fn delete_keyword(&self, id: &str) -> Result<()>;
}
