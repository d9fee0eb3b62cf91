//! Application-level configuration loading: where the HTTP server listens.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "MATCH_BOARD_CONFIG_PATH";
/// Environment variables checked, in order, for a port override.
const PORT_ENVS: [&str; 2] = ["PORT", "SERVER_PORT"];
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    host: IpAddr,
    port: u16,
}

impl AppConfig {
    /// Load the configuration from disk, then apply the port override from the environment.
    pub fn load() -> Self {
        let mut config = Self::from_file();
        if let Some(port) = port_override() {
            info!(port, "port overridden from environment");
            config.port = port;
        }
        config
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn from_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        addr = %app_config.listen_addr(),
                        "loaded server settings from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            host: value.host.unwrap_or(DEFAULT_HOST),
            port: value.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// First port found in [`PORT_ENVS`] that parses as a `u16`.
fn port_override() -> Option<u16> {
    PORT_ENVS
        .iter()
        .find_map(|name| env::var(name).ok())
        .and_then(|value| value.parse::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<AppConfig, serde_json::Error> {
        serde_json::from_str::<RawConfig>(json).map(AppConfig::from)
    }

    #[test]
    fn full_config_is_used_as_is() {
        let config = parse(r#"{ "host": "127.0.0.1", "port": 3000 }"#).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse(r#"{ "port": 9000 }"#).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000".parse().unwrap());

        let config = parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(parse(r#"{ "port": 70000 }"#).is_err());
        assert!(parse(r#"{ "host": "not-an-ip" }"#).is_err());
        assert!(parse(r#"{ "colors": [] }"#).is_err());
    }
}
