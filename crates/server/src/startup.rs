use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend, StorageConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::{seed, CoffeeRepository, InMemoryCoffeeRepository, JsonFileCoffeeRepository};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the configured repository backend.
pub async fn build_repository(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn CoffeeRepository>> {
    let repo: Arc<dyn CoffeeRepository> = match cfg.backend {
        StorageBackend::Memory => Arc::new(InMemoryCoffeeRepository::new()),
        StorageBackend::Json => Arc::new(JsonFileCoffeeRepository::new(&cfg.path).await?),
    };
    info!(backend = ?cfg.backend, path = %cfg.path, "coffee repository ready");
    Ok(repo)
}

/// Build handler state and load the demo menu (when enabled) before any traffic arrives.
pub async fn build_state(cfg: &StorageConfig) -> anyhow::Result<AppState> {
    let repo = build_repository(cfg).await?;
    let state = AppState::new(repo);
    if cfg.seed {
        if cfg.backend == StorageBackend::Json {
            warn!(path = %cfg.path, "seeding a file-backed store appends the demo coffees on every start");
        }
        seed::seed_demo_coffees(&*state.coffees).await?;
    }
    Ok(state)
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; shutdown only via process kill");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: build the app from `cfg` and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.storage).await?;
    let app = build_app(state);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "coffee api listening");
    serve(listener, app, shutdown_signal()).await
}
