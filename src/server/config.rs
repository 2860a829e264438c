/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, with sensible defaults for local development.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup;
 * an unparsable value falls back to the default.
 */

use std::net::SocketAddr;

/// Default port when `SERVER_PORT` is unset or invalid
const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to bind
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `SERVER_PORT`; a missing variable uses the default silently,
    /// an unparsable one is logged and falls back.
    pub fn from_env() -> Self {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid SERVER_PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self { port }
    }

    /// The socket address to bind (all interfaces).
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
