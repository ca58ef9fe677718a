use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::env_provider::EnvironmentProvider;
use crate::config::errors::ApplicationError;

/// Bootstrap settings for infrastructure configuration
///
/// Loaded once at startup. The upload directory is where submitted images
/// land on disk; it is created before the server binds if it does not exist.
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
    upload_dir: PathBuf,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables using ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let upload_dir_spec = ConfigSpec::new(env_provider.clone())
            .env_override("UPLOAD_DIR")
            .default_value("uploads")
            .min_length(1);

        let server_host = host_spec.load_setting_with_source()?.value;

        let port_value = port_spec.load_setting_with_source()?.value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let upload_dir = PathBuf::from(upload_dir_spec.load_setting_with_source()?.value);

        Ok(Self {
            server_host,
            server_port,
            upload_dir,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::env_provider::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
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

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}
