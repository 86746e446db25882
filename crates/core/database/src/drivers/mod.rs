#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

use keywords_config::Settings;

#[cfg(feature = "mongodb")]
pub use self::mongodb::*;
pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Connect to the configured MongoDB, failing when none is configured
    Auto(keywords_config::Database),
    /// Create an empty testing database, MongoDB if `TEST_DB=MONGODB`
    Test(String),
    /// Use the in-memory reference database
    Reference,
    /// Connect to MongoDB
    #[cfg(feature = "mongodb")]
    MongoDb { uri: String, database_name: String },
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
    /// MongoDB database
    #[cfg(feature = "mongodb")]
    MongoDb(MongoDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        match self {
            DatabaseInfo::Auto(config) => {
                if config.mongodb.is_empty() {
                    return Err("No MongoDB URI configured.".to_string());
                }

                #[cfg(feature = "mongodb")]
                return DatabaseInfo::MongoDb {
                    uri: config.mongodb,
                    database_name: config.name,
                }
                .connect()
                .await;

                #[cfg(not(feature = "mongodb"))]
                return Err("MongoDB not enabled.".to_string());
            }
            DatabaseInfo::Test(database_name) => match std::env::var("TEST_DB").as_deref() {
                Ok("MONGODB") => {
                    #[cfg(feature = "mongodb")]
                    {
                        let settings = Settings::load().map_err(|error| error.to_string())?;
                        return DatabaseInfo::MongoDb {
                            uri: settings.database.mongodb,
                            database_name,
                        }
                        .connect()
                        .await;
                    }

                    #[cfg(not(feature = "mongodb"))]
                    return Err(format!("MongoDB not enabled, cannot create {database_name}."));
                }
                _ => DatabaseInfo::Reference.connect().await,
            },
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
            #[cfg(feature = "mongodb")]
            DatabaseInfo::MongoDb { uri, database_name } => {
                let client = ::mongodb::Client::with_uri_str(uri)
                    .await
                    .map_err(|error| format!("Failed to init db connection: {error}"))?;

                let db = MongoDb(client, database_name);
                db.ping()
                    .await
                    .map_err(|error| format!("Failed to reach MongoDB: {error}"))?;

                info!("Connected to MongoDB database `{}`.", db.1);
                Ok(Database::MongoDb(db))
            }
        }
    }
}

impl From<&Settings> for DatabaseInfo {
    fn from(settings: &Settings) -> Self {
        DatabaseInfo::Auto(settings.database.clone())
    }
}

impl Database {
    /// Release the underlying connection
    pub async fn close(self) {
        match self {
            Database::Reference(_) => {}
            #[cfg(feature = "mongodb")]
            Database::MongoDb(MongoDb(client, _)) => {
                client.shutdown().await;
                info!("Closed MongoDB connection.");
            }
        }
    }

    /// Remove every record, only meant for tests
    pub async fn drop_database(&self) {
        match self {
            Database::Reference(db) => db.clear().await,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(db) => {
                if let Err(error) = db.db().drop().await {
                    error!("Failed to drop database: {error}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DatabaseInfo;

    #[tokio::test]
    async fn configured_database_is_required() {
        let result = DatabaseInfo::Auto(keywords_config::Database {
            mongodb: String::new(),
            name: "keywords".to_string(),
        })
        .connect()
        .await;

        assert_eq!(result.err().as_deref(), Some("No MongoDB URI configured."));
    }
}
