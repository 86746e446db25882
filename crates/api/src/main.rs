use keywords_api::AppState;
use keywords_config::Settings;
use keywords_database::DatabaseInfo;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    keywords_config::configure!(api);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(error) => {
            tracing::error!("Invalid configuration: {error}");
            std::process::exit(1);
        }
    };

    // Connect to the database, refusing to start without it
    let database = match DatabaseInfo::from(&settings).connect().await {
        Ok(database) => database,
        Err(error) => {
            tracing::error!("Database connection error: {error}");
            std::process::exit(1);
        }
    };

    let app = keywords_api::app(AppState {
        database: database.clone(),
        default_page_size: settings.api.default_page_size,
    });

    // Configure TCP listener and bind
    let listener = TcpListener::bind((settings.api.host.as_str(), settings.api.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!(
        "Play around with the API: http://localhost:{}/scalar",
        settings.api.port
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down.");
}
