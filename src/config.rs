//! Server configuration from the environment.
//! Used by: bin/status-server.

use crate::error::{Error, Result};

const PORT_VAR: &str = "PORT";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Reads `PORT` from the process environment, defaulting to 8080. A
    /// value that is not a valid port is a startup error, not a silent
    /// fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_port_var(std::env::var(PORT_VAR).ok().as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Result<Self> {
        let port = match value {
            Some(raw) => raw.parse().map_err(|source| Error::InvalidPort {
                value: raw.to_owned(),
                source,
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    /// The all-interfaces bind address for this configuration.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
