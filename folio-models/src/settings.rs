use config::{Config, File};
use folio_error::{FolioError, FolioResult};
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};

use crate::constants::DATA_DIR;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    pub fn new(config_path: String) -> FolioResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("web.cors.whitelist.origins")
                    .with_list_parse_key("web.cors.whitelist.methods")
                    .with_list_parse_key("web.cors.whitelist.headers")
                    .with_list_parse_key("web.cors.whitelist.expose_headers"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        inner.validate()?;
        Ok(Self(Arc::new(inner)))
    }
}

impl From<Inner> for Settings {
    fn from(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inner {
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub mail: Mail,
    #[serde(default)]
    pub admin: Admin,
}

impl Inner {
    /// Reject configurations the server cannot safely run with.
    ///
    /// The JWT secret has no fallback on purpose: a well-known default secret
    /// would let anyone mint admin tokens.
    fn validate(&self) -> FolioResult<()> {
        if self.web.jwt.secret.trim().is_empty() {
            return Err(FolioError::ConfigurationError(
                "web.jwt.secret must be set (config file or FOLIO__WEB__JWT__SECRET)".into(),
            ));
        }
        if self.mail.enabled {
            if self.mail.smtp_host.trim().is_empty() {
                return Err(FolioError::ConfigurationError(
                    "mail.smtp_host must be set when mail.enabled = true".into(),
                ));
            }
            if self.mail.username.trim().is_empty() {
                return Err(FolioError::ConfigurationError(
                    "mail.username must be set when mail.enabled = true".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: usize,
    #[serde(default)]
    pub cors: Cors,
    #[serde(default)]
    pub jwt: Jwt,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            cors: Default::default(),
            jwt: Default::default(),
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        5000
    }

    fn workers_default() -> usize {
        0 // 0 means "let actix pick" (one worker per core)
    }

    /// Explicit worker count, or `None` to use the actix default.
    pub fn worker_count(&self) -> Option<usize> {
        (self.workers > 0).then_some(self.workers)
    }
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    #[serde(default)]
    pub whitelist: Whitelist,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Whitelist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Whitelist {
    #[serde(default = "Whitelist::origins_default")]
    pub origins: Vec<String>,
    #[serde(default = "Whitelist::methods_default")]
    pub methods: Vec<String>,
    #[serde(default = "Whitelist::headers_default")]
    pub headers: Vec<String>,
    #[serde(default = "Whitelist::expose_headers_default")]
    pub expose_headers: Vec<String>,
    #[serde(default = "Whitelist::credentials_default")]
    pub credentials: bool,
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist {
            origins: Whitelist::origins_default(),
            methods: Whitelist::methods_default(),
            headers: Whitelist::headers_default(),
            expose_headers: Whitelist::expose_headers_default(),
            credentials: Whitelist::credentials_default(),
        }
    }
}

impl Whitelist {
    fn origins_default() -> Vec<String> {
        vec!["http://localhost:5173".into()]
    }

    fn methods_default() -> Vec<String> {
        vec!["GET".into(), "POST".into(), "PUT".into(), "DELETE".into()]
    }

    fn headers_default() -> Vec<String> {
        vec!["Content-Type".into(), "Authorization".into()]
    }

    fn expose_headers_default() -> Vec<String> {
        vec!["Content-Length".into(), "Content-Type".into()]
    }

    fn credentials_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jwt {
    /// Token signing secret. Required, no default.
    #[serde(default)]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "Jwt::expire_default")]
    pub expire: i64,
    #[serde(default = "Jwt::issuer_default")]
    pub issuer: String,
}

impl Default for Jwt {
    fn default() -> Self {
        Jwt {
            secret: String::new(),
            expire: Jwt::expire_default(),
            issuer: Jwt::issuer_default(),
        }
    }
}

impl Jwt {
    fn expire_default() -> i64 {
        604_800 // 7 days
    }

    fn issuer_default() -> String {
        "folio".into()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

/// SQLite database type enum
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    #[default]
    Sqlite,
}

/// FolioDbConfig is a trait that defines the necessary methods for database configuration.
/// It includes methods to get the database file path and connection URL for SQLite.
pub trait FolioDbConfig: Send + Sync {
    /// Returns the type of SQL database.
    fn db_type(&self) -> SqlType;

    /// Returns the database file path.
    fn db_path(&self) -> String;

    /// Generates a URL for the database connection.
    fn to_url(&self) -> String;

    /// Returns the directory containing the database file.
    fn db_dir(&self) -> String;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl FolioDbConfig for Sqlite {
    fn db_type(&self) -> SqlType {
        SqlType::Sqlite
    }

    fn db_path(&self) -> String {
        self.path.clone()
    }

    fn to_url(&self) -> String {
        if self.auto_create {
            // Use mode=rwc to automatically create file if it doesn't exist
            // r = read, w = write, c = create
            format!("sqlite:{}/{}?mode=rwc", DATA_DIR, self.path)
        } else {
            format!("sqlite:{}/{}", DATA_DIR, self.path)
        }
    }

    fn db_dir(&self) -> String {
        DATA_DIR.into()
    }
}

impl Sqlite {
    fn path_default() -> String {
        "folio.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        5000
    }

    fn max_lifetime_default() -> u64 {
        5000
    }

    fn max_connections_default() -> u32 {
        100
    }

    fn auto_create_default() -> bool {
        true
    }
}

/// Outbound mail (contact form notification) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Mail {
    /// Master switch. When false, contact submissions are stored but no
    /// mail is sent.
    #[serde(default = "Mail::enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "Mail::smtp_port_default")]
    pub smtp_port: u16,
    /// SMTP account. Also used as sender and notification recipient.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Send a confirmation mail back to the visitor.
    #[serde(default = "Mail::auto_reply_default")]
    pub auto_reply: bool,
}

impl Default for Mail {
    fn default() -> Self {
        Mail {
            enabled: Mail::enabled_default(),
            smtp_host: String::new(),
            smtp_port: Mail::smtp_port_default(),
            username: String::new(),
            password: String::new(),
            auto_reply: Mail::auto_reply_default(),
        }
    }
}

impl Mail {
    fn enabled_default() -> bool {
        false
    }

    fn smtp_port_default() -> u16 {
        587
    }

    fn auto_reply_default() -> bool {
        false
    }
}

/// Administrator identity.
///
/// `email`/`password` seed the admin account on first startup; `name` and
/// `email` also sign the contact auto-reply mail.
#[derive(Debug, Clone, Deserialize)]
pub struct Admin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "Admin::name_default")]
    pub name: String,
}

impl Default for Admin {
    fn default() -> Self {
        Admin {
            email: String::new(),
            password: String::new(),
            name: Admin::name_default(),
        }
    }
}

impl Admin {
    fn name_default() -> String {
        "Portfolio Owner".into()
    }
}
