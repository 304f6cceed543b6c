use paddock::config::AppConfig;
use paddock::error::AppError;
use paddock::routes::create_router;
use paddock::services::{remote::RemoteStore, storage::StorageService, sync::SyncService};
use paddock::state::AppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;

    let storage = StorageService::new(config.data_root.clone());
    storage.ensure_structure().await?;

    let remote = RemoteStore::new(config.sync_api_base.clone());
    let sync = SyncService::new(
        storage.clone(),
        remote,
        config.public_base_url.clone(),
        config.poll_interval,
    );
    sync.resume().await;

    let state = AppState::new(config.clone(), storage, sync);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,paddock=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
