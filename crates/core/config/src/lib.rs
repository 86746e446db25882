use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub host: String,
    pub port: u16,
    pub default_page_size: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
}

impl Settings {
    /// Load settings from the embedded defaults, a local Keywords.toml and the environment
    pub fn load() -> Result<Settings, ConfigError> {
        Settings::build(std::env::var("MONGO_URI").ok(), std::env::var("PORT").ok())
    }

    /// Build settings, applying the legacy `MONGO_URI` / `PORT` values last
    pub fn build(mongo_uri: Option<String>, port: Option<String>) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Keywords.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Keywords.toml").exists() {
            builder = builder.add_source(File::new("Keywords.toml", FileFormat::Toml));
        }

        builder
            .add_source(Environment::with_prefix("KEYWORDS").separator("__"))
            .set_override_option("database.mongodb", mongo_uri)?
            .set_override_option("api.port", port)?
            .build()?
            .try_deserialize::<Settings>()
    }
}

/// Load `.env` and install the tracing subscriber
pub fn setup_logging(crate_name: &'static str, application: &'static str) {
    dotenv::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("info,{crate_name}=debug,tower_http=debug"))
    });

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Logging was already configured, skipping.");
    }

    tracing::info!("Starting {application} ({crate_name})");
}

/// Configure logging and environment for a binary
#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        $crate::setup_logging(env!("CARGO_CRATE_NAME"), stringify!($application))
    };
}
