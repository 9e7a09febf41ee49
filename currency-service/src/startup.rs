//! Application startup and lifecycle management.

use crate::config::CurrencyConfig;
use crate::handlers;
use crate::models::RateTable;
use crate::services::CurrencyService;
use axum::middleware::from_fn;
use axum::{
    routing::{any, get, on, MethodFilter},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub currency: CurrencyService,
}

impl AppState {
    pub fn new() -> Self {
        let rates = Arc::new(RateTable::seeded());
        Self {
            currency: CurrencyService::new(rates),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/exchange",
            // GET only: `get` would also answer HEAD.
            on(MethodFilter::GET, handlers::exchange).fallback(handlers::method_not_allowed),
        )
        .route("/health", any(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/rates", any(handlers::list_rates))
        .route("/metrics", get(handlers::metrics::metrics))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router. Port 0 picks a free port.
    pub async fn build(config: CurrencyConfig) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState::new();
        tracing::info!(
            base = state.currency.rates().base(),
            currencies = state.currency.rates().entries().len(),
            "Rate table loaded"
        );

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Currency exchange service listening on port {}", self.port);
        tracing::info!("Endpoints: GET /exchange?from=USD&to=EUR&amount=100, GET /health, GET /rates");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
