//! Web server module for the portfolio backend
mod api;
mod middleware;
mod validation;

#[cfg(test)]
pub(crate) mod test_support;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use folio_error::{FolioError, FolioResult};
use folio_models::settings::Settings;
use folio_notify::Notifier;
use middleware::auth::Authentication;
use middleware::cors;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

pub use middleware::{AdminContext, RequestContext};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Settings,
    pub notifier: Arc<Notifier>,
}

/// FolioWebServer handles the web server initialization and management
pub struct FolioWebServer {
    /// Server handle for graceful shutdown
    server: Mutex<Option<ServerHandle>>,
}

impl FolioWebServer {
    /// Create and configure the HTTP server
    fn create_server(state: AppState) -> FolioResult<Server> {
        let addr = format!("{}:{}", state.settings.web.host, state.settings.web.port);
        let worker_count = state.settings.web.worker_count();
        let cors_config = state.settings.web.cors.clone();

        let mut server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(state.clone()))
                .app_data(validation::json_config())
                .app_data(validation::query_config())
                .app_data(validation::path_config())
                .wrap(cors::middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                // Public root routes (not under `/api`).
                .configure(api::configure_public_routes)
                // API routes. Authentication only decodes credentials; the
                // per-handler context extractors enforce them.
                .service(
                    web::scope("/api")
                        .wrap(Authentication)
                        .configure(api::configure_routes),
                )
        });

        if let Some(workers) = worker_count {
            server = server.workers(workers);
        }

        let server = server
            .bind(&addr)
            .map_err(|e| FolioError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        Ok(server.run())
    }

    /// Bind the listener and start serving in a background task
    #[instrument(name = "init-web-server", skip_all)]
    pub fn init(state: AppState) -> FolioResult<Arc<Self>> {
        let server = Self::create_server(state)?;
        let server_handle = server.handle();

        // Spawn server task
        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error = %e, "Web server failed");
            }
        });

        Ok(Arc::new(FolioWebServer {
            server: Mutex::new(Some(server_handle)),
        }))
    }

    /// Gracefully stop the web server
    #[instrument(name = "web-server-stop", skip_all)]
    pub async fn stop(&self) {
        info!("🛑 Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("✅ Web server stopped successfully");
    }
}
