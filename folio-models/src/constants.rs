// Constants for the folio modules
// This file contains global constants used across the application

/// The default configuration file name for the application.
/// This constant is used to specify the default configuration file
/// that the application will attempt to load at startup.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "folio.toml";

pub const BEARER_TOKEN: &str = "Bearer";

pub const DATA_DIR: &str = "./data";
