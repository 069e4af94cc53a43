use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, APP_DATA_DIR, DEFAULT_API_URL};

/// Runtime configuration: where the backend lives and where local state
/// (the persisted token) goes.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new<P: AsRef<Path>>(api_url: impl Into<String>, data_dir: P) -> Self {
        Self {
            api_url: api_url.into(),
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve the effective configuration: explicit arguments win, then the
    /// environment, then defaults.
    pub fn resolve(api_url: Option<String>, data_dir: Option<PathBuf>) -> Self {
        let api_url = api_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        Self { api_url, data_dir }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, default_data_dir())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = Config::resolve(
            Some("http://example.com/api".into()),
            Some(PathBuf::from("/tmp/folio")),
        );
        assert_eq!(config.api_url, "http://example.com/api");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/folio"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(DEFAULT_API_URL, "folio_data");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.data_dir, PathBuf::from("folio_data"));
    }
}
