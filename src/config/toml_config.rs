use crate::config::ProbeSettings;
use crate::utils::error::{DetectError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub probe: Option<ProbeSection>,
    pub endpoints: Option<EndpointSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeSection {
    pub host: Option<String>,
    pub ports: Option<Vec<u16>>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointSection {
    pub options_path: Option<String>,
    pub models_path: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DetectError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DetectError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DetectError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlay every value present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut ProbeSettings) {
        if let Some(probe) = &self.probe {
            if let Some(host) = &probe.host {
                settings.host = host.clone();
            }
            if let Some(ports) = &probe.ports {
                settings.ports = ports.clone();
            }
            if let Some(secs) = probe.timeout_seconds {
                settings.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(endpoints) = &self.endpoints {
            if let Some(path) = &endpoints.options_path {
                settings.options_path = path.clone();
            }
            if let Some(path) = &endpoints.models_path {
                settings.models_path = path.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MODELS_PATH, OPTIONS_PATH};

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
            [probe]
            ports = [7860]
            "#,
        )
        .unwrap();

        let mut settings = ProbeSettings::default();
        config.apply_to(&mut settings);

        assert_eq!(settings.ports, vec![7860]);
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.options_path, OPTIONS_PATH);
        assert_eq!(settings.models_path, MODELS_PATH);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SDAPI_PROBE_TEST_HOST", "127.0.0.1");
        let config = TomlConfig::from_toml_str(
            r#"
            [probe]
            host = "${SDAPI_PROBE_TEST_HOST}"
            "#,
        )
        .unwrap();

        let host = config.probe.and_then(|p| p.host);
        assert_eq!(host.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
            [endpoints]
            options_path = "${SDAPI_PROBE_SURELY_UNSET}"
            "#,
        )
        .unwrap();

        let path = config.endpoints.and_then(|e| e.options_path);
        assert_eq!(path.as_deref(), Some("${SDAPI_PROBE_SURELY_UNSET}"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[probe\nports = 1").unwrap_err();
        assert!(matches!(err, DetectError::ConfigValidationError { .. }));
    }
}
