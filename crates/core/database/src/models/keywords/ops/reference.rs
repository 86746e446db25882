use keywords_result::Result;

use crate::ReferenceDb;
use crate::{Channel, Keyword};

use super::AbstractKeywords;

#[async_trait]
impl AbstractKeywords for ReferenceDb {
    /// Insert new keyword into the database
    async fn insert_keyword(&self, keyword: &Keyword) -> Result<()> {
        self.record_operation();
        let mut keywords = self.keywords.lock().await;
        if keywords.contains_key(&keyword.id) {
            Err(create_database_error!("insert", "keyword"))
        } else {
            keywords.insert(keyword.id.to_string(), keyword.clone());
            Ok(())
        }
    }

    /// Fetch a keyword by its id
    async fn fetch_keyword(&self, id: &str) -> Result<Keyword> {
        self.record_operation();
        let keywords = self.keywords.lock().await;
        keywords
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a window of keywords in natural (id) order, optionally only for one username
    async fn fetch_keywords(
        &self,
        username: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Keyword>> {
        self.record_operation();
        let keywords = self.keywords.lock().await;
        let mut matching: Vec<&Keyword> = keywords
            .values()
            .filter(|keyword| username.map_or(true, |username| keyword.username == username))
            .collect();

        matching.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    /// Count keywords, optionally only for one username
    async fn count_keywords(&self, username: Option<&str>) -> Result<u64> {
        self.record_operation();
        let keywords = self.keywords.lock().await;
        Ok(keywords
            .values()
            .filter(|keyword| username.map_or(true, |username| keyword.username == username))
            .count() as u64)
    }

    /// Replace the channels of a keyword along with its channel count
    async fn update_keyword_channels(
        &self,
        id: &str,
        channels: &[Channel],
        channelcount: &str,
    ) -> Result<()> {
        self.record_operation();
        let mut keywords = self.keywords.lock().await;
        if let Some(keyword) = keywords.get_mut(id) {
            keyword.channels = channels.to_vec();
            keyword.channelcount = channelcount.to_string();
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete a keyword from the database
    async fn delete_keyword(&self, id: &str) -> Result<()> {
        self.record_operation();
        let mut keywords = self.keywords.lock().await;
        if keywords.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
