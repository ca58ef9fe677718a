use std::sync::Arc;

use crate::config::env_provider::EnvironmentProvider;
use crate::config::errors::ApplicationError;

/// A resolved configuration value and where it came from
#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_override: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking according to priority rules
    ///
    /// Environment overrides win over defaults. Values from either source
    /// pass through the same validation.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        if let Some(default) = &self.default_value {
            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        if self.required {
            let setting_name = self.env_override.as_deref().unwrap_or("unknown_setting");
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Required setting has no value from any source".to_string(),
            });
        }

        Ok(ConfigValue {
            value: String::new(),
            source: ConfigValueSource::Default,
        })
    }

    /// Apply this spec's length and custom validators to a candidate value
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_length) = self.min_length {
            if value.len() < min_length {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("must be at least {} characters long", min_length),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Validate a bind host: IPv4-looking values must parse as addresses,
    /// anything else is accepted as a hostname or IPv6 literal
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("cannot be empty".to_string());
        }

        let looks_ipv4 =
            value.contains('.') && value.chars().all(|c| c.is_ascii_digit() || c == '.');
        if looks_ipv4 && value.parse::<std::net::Ipv4Addr>().is_err() {
            return Err(format!("'{}' is not a valid IPv4 address", value));
        }

        Ok(())
    }

    /// Validate that a value is a port number within the given range
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        match value.parse::<u16>() {
            Ok(port) if port >= min && port <= max => Ok(()),
            Ok(port) => Err(format!(
                "Port {} is outside valid range {}-{}",
                port, min, max
            )),
            Err(_) => Err(format!(
                "Expected port number between {} and {}, got '{}'",
                min, max, value
            )),
        }
    }

    /// Parse a validated port value
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        value
            .parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Invalid port value: {}", e),
            })
    }
}
