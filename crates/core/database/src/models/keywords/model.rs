use std::sync::Mutex;

use chrono::{DateTime, SubsecRound, Utc};
use keywords_models::v0;
use keywords_result::Result;
use once_cell::sync::Lazy;
use ulid::{Generator, Ulid};

use crate::Database;

/// Monotonic so that id order matches creation order within a process
static ID_GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

fn next_id() -> String {
    ID_GENERATOR
        .lock()
        .ok()
        .and_then(|mut generator| generator.generate().ok())
        .unwrap_or_else(Ulid::new)
        .to_string()
}

auto_derived!(
    /// Keyword
    pub struct Keyword {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Username this keyword belongs to
        pub username: String,
        /// Channels belonging to this keyword
        pub channels: Vec<Channel>,
        /// Decimal count of `channels`, rewritten on every save
        #[serde(default)]
        pub channelcount: String,
    }

    /// Channel embedded in a keyword
    pub struct Channel {
        /// Channel name
        pub name: String,
        /// Whether the channel is available
        #[serde(default)]
        pub available: bool,
        /// Whether the channel is unavailable
        #[serde(default)]
        pub unavailable: bool,
        /// Time at which the channel was created
        #[serde(rename = "createdAt", with = "crate::util::iso_bson_chrono")]
        pub created_at: DateTime<Utc>,
    }
);

impl Channel {
    /// Create a channel with both flags cleared
    pub fn new(name: String) -> Channel {
        Channel {
            name,
            available: false,
            unavailable: false,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

impl Keyword {
    /// Recompute the channel count from the current channels
    pub fn recount(&mut self) {
        self.channelcount = self.channels.len().to_string();
    }

    /// Create a new keyword
    pub async fn create(db: &Database, username: String, channels: Vec<Channel>) -> Result<Keyword> {
        let mut keyword = Keyword {
            id: next_id(),
            username,
            channels,
            channelcount: String::new(),
        };

        keyword.recount();
        db.insert_keyword(&keyword).await?;
        Ok(keyword)
    }

    /// Fetch one page of keywords along with the total number of pages
    pub async fn fetch_page(
        db: &Database,
        username: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Keyword>, u64)> {
        let limit = limit.max(1);
        let count = db.count_keywords(username).await?;
        let keywords = db
            .fetch_keywords(
                username,
                page.saturating_sub(1).saturating_mul(limit),
                limit,
            )
            .await?;

        Ok((keywords, v0::KeywordsPage::pages_for(count, limit)))
    }

    /// Replace all channels on this keyword
    pub async fn update_channels(&mut self, db: &Database, channels: Vec<Channel>) -> Result<()> {
        self.channels = channels;
        self.recount();
        db.update_keyword_channels(&self.id, &self.channels, &self.channelcount)
            .await
    }

    /// Merge channel names into the oldest keyword for `username`, creating one if none exist
    ///
    /// Names already present are skipped. Returns whether a new keyword was created.
    pub async fn merge(
        db: &Database,
        username: String,
        names: Vec<String>,
    ) -> Result<(Keyword, bool)> {
        let existing = db
            .fetch_keywords(Some(&username), 0, 1)
            .await?
            .into_iter()
            .next();

        match existing {
            Some(mut keyword) => {
                let mut channels = keyword.channels.clone();
                append_missing(&mut channels, names);
                keyword.update_channels(db, channels).await?;
                Ok((keyword, false))
            }
            None => {
                let mut channels = Vec::new();
                append_missing(&mut channels, names);
                Keyword::create(db, username, channels)
                    .await
                    .map(|keyword| (keyword, true))
            }
        }
    }

    /// Delete this keyword
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_keyword(&self.id).await
    }
}

fn append_missing(channels: &mut Vec<Channel>, names: Vec<String>) {
    for name in names {
        if !channels.iter().any(|channel| channel.name == name) {
            channels.push(Channel::new(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use keywords_result::ErrorType;

    use crate::{Channel, Keyword};

    fn channels(names: &[&str]) -> Vec<Channel> {
        names.iter().map(|name| Channel::new(name.to_string())).collect()
    }

    #[tokio::test]
    async fn crud() {
        database_test!(|db| async move {
            let mut keyword = Keyword::create(&db, "alice".to_string(), channels(&["chA"]))
                .await
                .unwrap();

            assert_eq!(keyword.channelcount, "1");
            assert_eq!(db.fetch_keyword(&keyword.id).await.unwrap(), keyword);

            keyword
                .update_channels(&db, channels(&["chA", "chB"]))
                .await
                .unwrap();

            let fetched = db.fetch_keyword(&keyword.id).await.unwrap();
            assert_eq!(fetched.channelcount, "2");
            assert_eq!(fetched.channels[1].name, "chB");

            keyword.delete(&db).await.unwrap();
            assert!(matches!(
                db.fetch_keyword(&keyword.id).await.unwrap_err().error_type,
                ErrorType::NotFound
            ));
            assert!(matches!(
                keyword.delete(&db).await.unwrap_err().error_type,
                ErrorType::NotFound
            ));
        });
    }

    #[tokio::test]
    async fn update_missing_keyword() {
        database_test!(|db| async move {
            let mut keyword = Keyword::create(&db, "bob".to_string(), channels(&["chA"]))
                .await
                .unwrap();

            db.delete_keyword(&keyword.id).await.unwrap();
            let error = keyword
                .update_channels(&db, channels(&["chB"]))
                .await
                .unwrap_err();

            assert!(matches!(error.error_type, ErrorType::NotFound));
        });
    }

    #[tokio::test]
    async fn paging() {
        database_test!(|db| async move {
            let mut ids = Vec::new();
            for i in 0..5 {
                let username = if i % 2 == 0 { "alice" } else { "bob" };
                let keyword = Keyword::create(&db, username.to_string(), channels(&["chA"]))
                    .await
                    .unwrap();
                ids.push(keyword.id);
            }

            let (page, total_pages) = Keyword::fetch_page(&db, None, 1, 2).await.unwrap();
            assert_eq!(total_pages, 3);
            assert_eq!(
                page.into_iter().map(|keyword| keyword.id).collect::<Vec<_>>(),
                ids[0..2]
            );

            let (page, _) = Keyword::fetch_page(&db, None, 3, 2).await.unwrap();
            assert_eq!(page.len(), 1);
            assert_eq!(page[0].id, ids[4]);

            let (page, total_pages) = Keyword::fetch_page(&db, Some("alice"), 1, 15)
                .await
                .unwrap();
            assert_eq!(total_pages, 1);
            assert_eq!(page.len(), 3);
            assert!(page.iter().all(|keyword| keyword.username == "alice"));

            let (page, total_pages) = Keyword::fetch_page(&db, Some("carol"), 1, 15)
                .await
                .unwrap();
            assert_eq!(total_pages, 0);
            assert!(page.is_empty());
        });
    }

    #[tokio::test]
    async fn merge_appends_new_names_only() {
        database_test!(|db| async move {
            let (created, was_created) = Keyword::merge(
                &db,
                "alice".to_string(),
                vec!["chA".to_string(), "chA".to_string()],
            )
            .await
            .unwrap();

            assert!(was_created);
            assert_eq!(created.channelcount, "1");

            let (merged, was_created) = Keyword::merge(
                &db,
                "alice".to_string(),
                vec!["chA".to_string(), "chB".to_string()],
            )
            .await
            .unwrap();

            assert!(!was_created);
            assert_eq!(merged.id, created.id);
            assert_eq!(merged.channelcount, "2");
            assert_eq!(
                merged
                    .channels
                    .iter()
                    .map(|channel| channel.name.as_str())
                    .collect::<Vec<_>>(),
                vec!["chA", "chB"]
            );

            assert_eq!(db.count_keywords(Some("alice")).await.unwrap(), 1);
        });
    }

    #[tokio::test]
    async fn merge_targets_oldest_duplicate() {
        database_test!(|db| async move {
            let first = Keyword::create(&db, "alice".to_string(), channels(&["chA"]))
                .await
                .unwrap();
            let second = Keyword::create(&db, "alice".to_string(), channels(&["chZ"]))
                .await
                .unwrap();

            let (merged, _) = Keyword::merge(&db, "alice".to_string(), vec!["chB".to_string()])
                .await
                .unwrap();

            assert_eq!(merged.id, first.id);
            assert_eq!(db.fetch_keyword(&second.id).await.unwrap(), second);
        });
    }
}
