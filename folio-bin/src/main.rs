use clap::Parser;
use folio_common::{shutdown_signal, Logger};
use folio_error::{FolioError, FolioResult};
use folio_models::{constants::DEFAULT_CONFIG_FILE_NAME, settings::Settings};
use folio_notify::Notifier;
use folio_storage::DbManager;
use folio_web::{AppState, FolioWebServer};
use std::{env::current_dir, path::PathBuf, sync::Arc};
use tokio_util::task::TaskTracker;
use tracing::{info, instrument, Level};

/// Folio - personal portfolio backend
///
/// A REST API server backing a personal portfolio site: public content
/// endpoints, an authenticated admin surface, and contact form intake
/// with mail notifications.
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Folio", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server will look for 'folio.toml'
    /// in the current working directory.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

/// Running components, held for graceful shutdown.
struct Application {
    db_manager: Arc<DbManager>,
    notifier: Arc<Notifier>,
    web_server: Arc<FolioWebServer>,
}

impl Application {
    /// Bring every component up in dependency order.
    #[instrument(name = "init-app", skip_all)]
    async fn start(settings: Settings) -> FolioResult<Self> {
        let db_manager = DbManager::init(&settings).await?;
        let db = db_manager.get_connection()?;

        let notifier = Arc::new(Notifier::start(settings.clone())?);
        info!("Mail notifier initialized successfully.");

        let web_server = FolioWebServer::init(AppState {
            db,
            settings,
            notifier: Arc::clone(&notifier),
        })?;
        info!("Web server initialized successfully.");

        info!(
            "🚀 Folio is up; listening for requests (version {})",
            env!("CARGO_PKG_VERSION")
        );

        Ok(Application {
            db_manager,
            notifier,
            web_server,
        })
    }

    #[instrument(name = "graceful-shutdown", skip_all)]
    async fn shutdown(self) -> FolioResult<()> {
        info!("🛑 Starting graceful shutdown...");

        let Application {
            db_manager,
            notifier,
            web_server,
        } = self;

        // Shutdown components in reverse order of initialization
        let tracker = TaskTracker::new();
        tracker.spawn(async move {
            web_server.stop().await;
        });
        tracker.spawn(async move {
            notifier.close().await;
        });
        tracker.spawn(async move {
            let _ = db_manager.close().await;
        });

        info!("⏳ Waiting for all components to shutdown gracefully...");
        tracker.close();
        tracker.wait().await;

        info!("✅ Graceful shutdown completed successfully");
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> FolioResult<()> {
    let cli = Cli::parse();

    // Determine the configuration file path
    // If not provided via CLI or environment variable, use default path
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| FolioError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    // The logger instance must outlive the runtime; dropping it loses
    // buffered file output.
    let mut logger = Logger::new(if cfg!(debug_assertions) {
        Some(Level::DEBUG)
    } else {
        Some(Level::INFO)
    });
    logger.initialize()?;

    let settings = Settings::new(config_path.to_string_lossy().to_string())?;

    let app = Application::start(settings).await?;

    shutdown_signal().await;
    app.shutdown().await
}
