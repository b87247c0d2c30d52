//! Server settings read from the environment.
//!
//! | Variable               | Default          |
//! |------------------------|------------------|
//! | `COLLEGE_HOST`         | `127.0.0.1`      |
//! | `COLLEGE_PORT`         | `8080`           |
//! | `COLLEGE_DATABASE`     | `college.sqlite` |
//! | `COLLEGE_OPEN_BROWSER` | `true`           |
//!
//! Unparseable values fall back to the default with a warning.

use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: PathBuf,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database: PathBuf::from("college.sqlite"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("COLLEGE_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "COLLEGE_PORT", defaults.port),
            database: lookup("COLLEGE_DATABASE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database),
            open_browser: parse_or(&lookup, "COLLEGE_OPEN_BROWSER", defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}={:?} inválido; usando o padrão", key, raw);
            default
        }),
        None => default,
    }
}
