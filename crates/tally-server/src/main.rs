//! tally server binary.
//!
//! - Config: `TALLY_CONFIG` / `tally.yaml` / defaults, `PORT` override
//! - Logging: `RUST_LOG`, falling back to `server.log_level`
//! - Graceful shutdown on Ctrl-C / SIGTERM (readiness flips to draining first)

use tracing_subscriber::{fmt, EnvFilter};

use tally_core::error::{Result, TallyError};
use tally_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.server.log_level));
    fmt().with_env_filter(filter).init();

    let listen = cfg.server.listen_addr()?;
    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone())?;

    tracing::info!(%listen, service = %state.cfg().service.name, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| TallyError::Internal(format!("server failed: {e}")))?;

    tracing::info!("tally-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
