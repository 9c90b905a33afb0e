use repairdash::{
    api,
    core::{config, prelude::*},
    store::PgTransactionStore,
    view::templates::Templates,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let dotenv = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repairdash=debug,tower_http=info".into()),
        )
        .init();

    if let Err(err) = dotenv {
        tracing::warn!(error = %err, "ignoring unreadable .env file");
    }

    if let Err(err) = run().await {
        tracing::error!(error = %err, "repairdash failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let store = PgTransactionStore::connect_lazy(config.connect_options()?);
    tracing::info!(
        tls_required = !config.is_local_database(),
        "database pool created"
    );

    let app_state = AppState::new(Arc::new(store), Templates::new()?);
    let app = api::router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
