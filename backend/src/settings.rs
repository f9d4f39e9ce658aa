//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ENROLLMENT_*` environment variables, and
//! configuration files, in that order of precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Failure to turn the configured host and port into a socket address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind host '{host}': {reason}")]
pub struct SettingsError {
    host: String,
    reason: String,
}

/// Configuration values for the HTTP listener and logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENROLLMENT")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Emit human-readable logs instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port()))
            .map_err(|err| SettingsError {
                host: host.to_owned(),
                reason: err.to_string(),
            })
    }
}
