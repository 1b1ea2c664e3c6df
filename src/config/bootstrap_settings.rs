use std::fmt;
use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "storeroom";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    mongodb_url: String,
    database_name: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let mongodb_url = non_empty(
            "MONGODB_URL",
            env_provider
                .get_var("MONGODB_URL")
                .unwrap_or_else(|| DEFAULT_MONGODB_URL.to_string()),
        )?;

        let database_name = non_empty(
            "MONGODB_DATABASE",
            env_provider
                .get_var("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        )?;

        let server_host = non_empty(
            "HOST",
            env_provider
                .get_var("HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        )?;

        let port_value = env_provider
            .get_var("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        let server_port = parse_port(&port_value)?;

        Ok(Self {
            mongodb_url,
            database_name,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn mongodb_url(&self) -> &str {
        &self.mongodb_url
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn non_empty(setting_name: &str, value: String) -> Result<String, ApplicationError> {
    if value.trim().is_empty() {
        return Err(ApplicationError::invalid_setting(
            setting_name,
            "cannot be empty",
        ));
    }
    Ok(value)
}

fn parse_port(value: &str) -> Result<u16, ApplicationError> {
    let port: u16 = value.parse().map_err(|_| {
        ApplicationError::invalid_setting(
            "PORT",
            format!("Expected port number between 1 and 65535, got {:?}", value),
        )
    })?;

    if port == 0 {
        return Err(ApplicationError::invalid_setting(
            "PORT",
            "port 0 is outside valid range",
        ));
    }

    Ok(port)
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("mongodb_url", &self.mongodb_url)
            .field("database_name", &self.database_name)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
