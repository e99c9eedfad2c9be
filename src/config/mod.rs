#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

/// Candidate ports, in priority order.
pub const DEFAULT_PORTS: [u16; 2] = [7086, 7860];
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const OPTIONS_PATH: &str = "/sdapi/v1/options";
pub const MODELS_PATH: &str = "/sdapi/v1/sd-models";

pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Fully resolved probe configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    pub host: String,
    pub ports: Vec<u16>,
    pub timeout: Duration,
    pub options_path: String,
    pub models_path: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            ports: DEFAULT_PORTS.to_vec(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            options_path: OPTIONS_PATH.to_string(),
            models_path: MODELS_PATH.to_string(),
        }
    }
}

impl ProbeSettings {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_ports(mut self, ports: Vec<u16>) -> Self {
        self.ports = ports;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ConfigProvider for ProbeSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn ports(&self) -> &[u16] {
        &self.ports
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn options_path(&self) -> &str {
        &self.options_path
    }

    fn models_path(&self) -> &str {
        &self.models_path
    }
}

impl Validate for ProbeSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("probe.host", &self.host)?;
        validation::validate_ports("probe.ports", &self.ports)?;
        validation::validate_endpoint_path("endpoints.options_path", &self.options_path)?;
        validation::validate_endpoint_path("endpoints.models_path", &self.models_path)?;

        validation::validate_range(
            "probe.timeout_ms",
            self.timeout.as_millis(),
            1,
            u128::from(MAX_TIMEOUT_SECS) * 1000,
        )?;

        for &port in &self.ports {
            validation::validate_host_port("probe.host", &self.host, port)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_known_service_layout() {
        let settings = ProbeSettings::default();
        assert_eq!(settings.ports, vec![7086, 7860]);
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.base_url(7086), "http://localhost:7086");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let settings = ProbeSettings::default().with_timeout(Duration::ZERO);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_host_that_breaks_url() {
        let settings = ProbeSettings::default().with_host("bad host");
        assert!(settings.validate().is_err());

        let settings = ProbeSettings::default().with_host("localhost/x");
        assert!(settings.validate().is_err());

        let settings = ProbeSettings::default().with_host("localhost?x=");
        assert!(settings.validate().is_err());
    }
}
