//! Server settings read from the environment (after `.env` is loaded).
//!
//! | variable                 | default           |
//! |--------------------------|-------------------|
//! | `HOSPITAL_HOST`          | `127.0.0.1`       |
//! | `HOSPITAL_PORT`          | `3000`            |
//! | `HOSPITAL_DATABASE`      | `hospital.sqlite` |
//! | `HOSPITAL_OPEN_BROWSER`  | `false`           |

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE: &str = "hospital.sqlite";

/// Create bodies larger than this fail like any other bad request.
pub const PAYLOAD_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file path, or `:memory:` for a throwaway store.
    pub database: String,
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            open_browser: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("HOSPITAL_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("HOSPITAL_PORT={:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        AppConfig {
            host: lookup("HOSPITAL_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            database: lookup("HOSPITAL_DATABASE")
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(defaults.database),
            open_browser: lookup("HOSPITAL_OPEN_BROWSER")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
