//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default backend base URL (development server)
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "FOLIO_API_URL";

/// Directory name under the platform data dir
pub const APP_DATA_DIR: &str = "folio-admin";

/// File name the bearer token is persisted under (fixed key, like the
/// original single localStorage entry)
pub const TOKEN_FILE: &str = "token";

/// Rows per page on the admin list screens
pub const PAGE_SIZE: usize = 10;

// Client-side validation bounds
pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const SKILL_LEVEL_MIN: u8 = 1;
pub const SKILL_LEVEL_MAX: u8 = 100;
