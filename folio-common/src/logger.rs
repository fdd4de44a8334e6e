use folio_error::{FolioError, FolioResult};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

/// Console plus daily-rolling file logging.
///
/// The instance must stay alive for the lifetime of the process; dropping it
/// drops the non-blocking writer guard and loses buffered file output.
pub struct Logger {
    level: Level,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: level.unwrap_or(Level::INFO),
            _file_guard: None,
        }
    }

    /// Initializes the logger
    ///
    /// This function sets up logging output to both the console and a rolling
    /// log file, with filtering based on the configured log level.
    pub fn initialize(&mut self) -> FolioResult<()> {
        // Create a daily rolling file appender for log files
        let file_appender = rolling::daily("logs", "folio.log");
        // Convert the file appender into a non-blocking writer
        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(_guard);

        let filter = LevelFilter::from_level(self.level);

        // Create a console layer with specific formatting options
        let console_layer = {
            #[cfg(debug_assertions)]
            let mut layer = fmt::layer().pretty().with_writer(std::io::stdout);

            #[cfg(not(debug_assertions))]
            let mut layer = fmt::layer().with_writer(std::io::stdout);

            #[cfg(debug_assertions)]
            {
                layer = layer.with_file(true).with_line_number(true);
            }

            #[cfg(not(debug_assertions))]
            {
                layer = layer.with_file(false).with_line_number(false);
            }

            layer.with_filter(filter)
        };

        // Create a file layer with specific formatting options
        let file_layer = {
            #[cfg(debug_assertions)]
            let mut layer = fmt::layer()
                .pretty()
                .with_writer(non_blocking)
                .with_ansi(false);

            #[cfg(not(debug_assertions))]
            let mut layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

            #[cfg(debug_assertions)]
            {
                layer = layer.with_file(true).with_line_number(true);
            }

            #[cfg(not(debug_assertions))]
            {
                layer = layer.with_file(false).with_line_number(false);
            }

            layer.with_filter(filter)
        };

        // Combine the console and file layers into a single subscriber
        let subscriber = Registry::default().with(console_layer).with(file_layer);

        // Set the combined subscriber as the global default subscriber
        set_global_default(subscriber).map_err(|_| FolioError::from("Failed to set logger"))?;
        Ok(())
    }
}
