use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_clock::modules::time_entries::adapters::outbound::time_entry_repository::TimeEntryRepository;
use time_clock::modules::time_entries::use_cases::track_time::registry::SessionRegistry;
use time_clock::shared::infrastructure::clock::SystemClock;
use time_clock::shared::infrastructure::key_value_store::KeyValueStore;
use time_clock::shared::infrastructure::key_value_store::file_system::FileKeyValueStore;
use time_clock::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use time_clock::shell::config::Settings;
use time_clock::shell::graphql::GRAPHQL_PATH;
use time_clock::shell::http::router;
use time_clock::shell::state::AppState;
use time_clock::shell::workers::spawn_ticker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store: Arc<dyn KeyValueStore> = match &settings.storage_dir {
        Some(directory) => {
            tracing::info!(directory = %directory.display(), "using file storage");
            Arc::new(FileKeyValueStore::open(directory.clone()).await?)
        }
        None => {
            tracing::warn!("STORAGE_DIR not set, time entries are kept in memory only");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let sessions = Arc::new(SessionRegistry::new(
        TimeEntryRepository::new(store),
        Arc::new(SystemClock),
    ));
    let _ticker = spawn_ticker(sessions.clone(), settings.tick_interval);
    let app = router(AppState::new(sessions, settings.require_location));

    let addr = settings.address()?;
    tracing::info!("HTTP endpoint: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
