use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use blog_store::BlogStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::service::BlogService;

/// Blog service host.
///
/// Shutdown order: stop accepting, let in-flight calls finish, then close
/// the store. The store is closed whether serving ended cleanly or not.
pub struct BlogServer {
    config: ServerConfig,
    service: BlogService,
}

impl BlogServer {
    pub fn new(config: ServerConfig, store: Arc<dyn BlogStore>) -> Self {
        Self {
            config,
            service: BlogService::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.service.clone())
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM.
    ///
    /// If the address cannot be bound the store is closed before the bind
    /// error is returned.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = match TcpListener::bind(self.config.bind_addr).await {
            Ok(listener) => listener,
            Err(err) => {
                warn!(addr = %self.config.bind_addr, %err, "cannot bind");
                if let Err(close_err) = self.service.store().close().await {
                    warn!(%close_err, "failed to close store");
                }
                info!("store connection released");
                return Err(err.into());
            }
        };
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `signal` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let store = Arc::clone(self.service.store());
        info!(%addr, backend = store.backend(), "blog service listening");

        let served = axum::serve(listener, build_router(self.service))
            .with_graceful_shutdown(signal)
            .await;
        match &served {
            Ok(()) => info!("stopped accepting requests; in-flight requests finished"),
            Err(err) => warn!(%err, "server terminated with error"),
        }

        let closed = store.close().await;
        info!("store connection released");

        served?;
        closed?;
        Ok(())
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        tokio::select! {
            _ = ctrl_c() => {},
            _ = terminate() => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c().await;
    }
    info!("shutdown signal received");
}

async fn ctrl_c() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(?err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            warn!(?err, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}
