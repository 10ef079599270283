use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentProvider;
use crate::config::errors::SettingsError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_DATA_DIR: &str = ".";

/// Server settings: where to listen and where the collection files live
pub struct ServerSettings {
    host: IpAddr,
    port: u16,
    data_dir: PathBuf,
}

impl ServerSettings {
    /// Load settings from the given environment
    ///
    /// `HOST` must be an IP address, `PORT` an integer in 1..=65535 and
    /// `DATA_DIR` a non-empty path. Unset variables take their defaults.
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let host_value = env.get_var_or("HOST", DEFAULT_HOST);
        let host = host_value
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| SettingsError::ParseError {
                setting_name: "HOST".to_string(),
                error: format!("'{}' is not an IP address: {}", host_value, e),
            })?;

        let port = Self::parse_port(&env.get_var_or("PORT", DEFAULT_PORT))?;

        let data_dir = env.get_var_or("DATA_DIR", DEFAULT_DATA_DIR);
        if data_dir.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                setting_name: "DATA_DIR".to_string(),
                reason: "Value must not be empty".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            data_dir: PathBuf::from(data_dir),
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(&SystemEnvironment)
    }

    fn parse_port(value: &str) -> Result<u16, SettingsError> {
        let port = value.trim().parse::<u32>().map_err(|e| SettingsError::ParseError {
            setting_name: "PORT".to_string(),
            error: format!("'{}' is not a number: {}", value, e),
        })?;

        if !(1..=65535).contains(&port) {
            return Err(SettingsError::InvalidSetting {
                setting_name: "PORT".to_string(),
                reason: format!("Port must be between 1 and 65535, got {}", port),
            });
        }

        Ok(port as u16)
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn server_address(&self) -> String {
        match self.host {
            IpAddr::V6(v6) => format!("[{}]:{}", v6, self.port),
            IpAddr::V4(v4) => format!("{}:{}", v4, self.port),
        }
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .finish()
    }
}
